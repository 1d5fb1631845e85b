use flowdose_core::{
    CalibrationStatus, DeviceStatus, DispensingStatus, PresetSet, VolumeUnit, WifiStatus,
};
use flowdose_ui::view::{BadgeTone, Controls, Screen, Section};
use flowdose_ui::{preset_buttons, reflect};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn status(state: &str) -> DeviceStatus {
    DeviceStatus {
        dispensing: DispensingStatus {
            state: state.into(),
            dispensed: 125.0,
            target: 500.0,
            remaining: 375.0,
            progress: 25,
            valve_open: state == "dispensing",
        },
        wifi: WifiStatus {
            connected: true,
            ssid: "workshop".to_string(),
            ip: "192.168.1.23".to_string(),
            rssi: Some(-58),
        },
        calibration: CalibrationStatus {
            pulses_per_liter: 45000.0,
        },
    }
}

#[rstest]
#[case("idle", Section::Main, Controls::None)]
#[case("completed", Section::Main, Controls::None)]
#[case("dispensing", Section::Progress, Controls::Dispensing)]
#[case("paused", Section::Progress, Controls::Paused)]
fn sections_follow_the_device_state(
    #[case] state: &str,
    #[case] section: Section,
    #[case] controls: Controls,
) {
    let view = reflect(&status(state), VolumeUnit::Milliliters, &PresetSet::default());
    assert_eq!(view.section, Some(section));
    assert_eq!(view.controls, Some(controls));
}

#[test]
fn idle_push_restores_the_main_section_regardless_of_prior_state() {
    let mut screen = Screen::default();
    screen.apply(&reflect(
        &status("dispensing"),
        VolumeUnit::Milliliters,
        &PresetSet::default(),
    ));
    assert_eq!(screen.section, Section::Progress);

    screen.apply(&reflect(
        &status("idle"),
        VolumeUnit::Milliliters,
        &PresetSet::default(),
    ));
    assert_eq!(screen.section, Section::Main);
    assert_eq!(screen.controls, Controls::None);
}

#[rstest]
#[case("error")]
#[case("error_timeout")]
#[case("error_no_flow")]
fn error_states_mark_the_badge_and_leave_sections_alone(#[case] state: &str) {
    let mut screen = Screen::default();
    screen.apply(&reflect(
        &status("paused"),
        VolumeUnit::Milliliters,
        &PresetSet::default(),
    ));

    let view = reflect(&status(state), VolumeUnit::Milliliters, &PresetSet::default());
    assert_eq!(view.section, None);
    assert_eq!(view.controls, None);
    assert_eq!(view.badge.tone, BadgeTone::Error);
    assert_eq!(view.badge.label, state.to_uppercase());

    screen.apply(&view);
    assert_eq!(screen.section, Section::Progress);
    assert_eq!(screen.controls, Controls::Paused);
}

#[test]
fn unrecognized_states_only_touch_the_badge() {
    let view = reflect(&status("stopping"), VolumeUnit::Milliliters, &PresetSet::default());
    assert_eq!(view.badge.label, "STOPPING");
    assert_eq!(view.badge.tone, BadgeTone::Neutral);
    assert_eq!(view.section, None);
}

#[test]
fn reflection_is_idempotent() {
    let status = status("dispensing");
    let first = reflect(&status, VolumeUnit::Liters, &PresetSet::default());
    let second = reflect(&status, VolumeUnit::Liters, &PresetSet::default());
    assert_eq!(first, second);

    let mut screen = Screen::default();
    screen.apply(&first);
    let applied_once = screen.clone();
    screen.apply(&second);
    assert_eq!(screen, applied_once);
}

#[test]
fn volume_text_goes_through_the_active_unit() {
    let view = reflect(&status("dispensing"), VolumeUnit::Liters, &PresetSet::default());
    assert_eq!(view.dispensed, "0.125 L");
    assert_eq!(view.target, "0.500 L");
    assert_eq!(view.remaining, "0.375 L");
    assert_eq!(view.unit_hint, "Enter amount in liters");

    let view = reflect(&status("dispensing"), VolumeUnit::Milliliters, &PresetSet::default());
    assert_eq!(view.target, "500.0 ml");
    assert_eq!(view.unit_hint, "Enter amount in milliliters");
}

#[test]
fn default_presets_render_in_the_active_unit() {
    // The fallback set after a failed load must render as exactly these
    // four values in whichever unit is active.
    let buttons = preset_buttons(VolumeUnit::Milliliters, &PresetSet::default());
    let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["100.0 ml", "250.0 ml", "500.0 ml", "1000.0 ml"]);

    let buttons = preset_buttons(VolumeUnit::Liters, &PresetSet::default());
    let labels: Vec<_> = buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["0.100 L", "0.250 L", "0.500 L", "1.000 L"]);
}

#[test]
fn wifi_and_calibration_lines() {
    let view = reflect(&status("idle"), VolumeUnit::Milliliters, &PresetSet::default());
    assert_eq!(view.wifi.summary, "WiFi: workshop (192.168.1.23)");
    assert_eq!(view.wifi.signal.as_deref(), Some("Excellent (-58 dBm)"));
    assert_eq!(view.calibration, "45000.00 pulses/L");

    let mut offline = status("idle");
    offline.wifi = WifiStatus {
        connected: false,
        ssid: String::new(),
        ip: String::new(),
        rssi: None,
    };
    let view = reflect(&offline, VolumeUnit::Milliliters, &PresetSet::default());
    assert_eq!(view.wifi.summary, "WiFi: Not connected");
    assert_eq!(view.wifi.ssid, "-");
    assert_eq!(view.wifi.signal, None);
}
