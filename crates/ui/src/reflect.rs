use flowdose_core::{DeviceStatus, PresetSet, StateKind, VolumeUnit, WifiStatus};

use crate::view::{Badge, BadgeTone, Controls, PresetButton, Section, ViewModel, WifiView};

/// Map one status push onto view mutations. Pure and idempotent: same
/// inputs, same mutations. All volume text goes through the active unit's
/// `format`/`suffix`; no unit arithmetic happens here.
pub fn reflect(status: &DeviceStatus, unit: VolumeUnit, presets: &PresetSet) -> ViewModel {
    let kind = status.dispensing.state.kind();
    let (section, controls) = match kind {
        StateKind::Idle | StateKind::Completed => (Some(Section::Main), Some(Controls::None)),
        StateKind::Dispensing => (Some(Section::Progress), Some(Controls::Dispensing)),
        StateKind::Paused => (Some(Section::Progress), Some(Controls::Paused)),
        // Error and unrecognized states only touch the badge.
        StateKind::Error | StateKind::Other => (None, None),
    };

    ViewModel {
        badge: Badge {
            label: status.dispensing.state.as_str().to_uppercase(),
            tone: badge_tone(kind),
        },
        section,
        controls,
        dispensed: unit.format_with_suffix(status.dispensing.dispensed),
        target: unit.format_with_suffix(status.dispensing.target),
        remaining: unit.format_with_suffix(status.dispensing.remaining),
        progress_percent: status.dispensing.progress.min(100),
        valve_open: status.dispensing.valve_open,
        calibration: format!("{:.2} pulses/L", status.calibration.pulses_per_liter),
        wifi: wifi_view(&status.wifi),
        preset_buttons: preset_buttons(unit, presets),
        unit_hint: format!("Enter amount in {}", unit.full_name()),
    }
}

/// Preset buttons are regenerated wholesale on every pass, never patched.
pub fn preset_buttons(unit: VolumeUnit, presets: &PresetSet) -> Vec<PresetButton> {
    presets
        .values()
        .iter()
        .map(|ml| PresetButton {
            label: unit.format_with_suffix(*ml),
            amount_ml: *ml,
        })
        .collect()
}

fn badge_tone(kind: StateKind) -> BadgeTone {
    match kind {
        StateKind::Idle | StateKind::Completed => BadgeTone::Idle,
        StateKind::Dispensing => BadgeTone::Dispensing,
        StateKind::Paused => BadgeTone::Paused,
        StateKind::Error => BadgeTone::Error,
        StateKind::Other => BadgeTone::Neutral,
    }
}

fn wifi_view(wifi: &WifiStatus) -> WifiView {
    let summary = if wifi.connected {
        format!("WiFi: {} ({})", wifi.ssid, wifi.ip)
    } else {
        "WiFi: Not connected".to_string()
    };

    WifiView {
        summary,
        connected_label: if wifi.connected {
            "Connected"
        } else {
            "Not Connected"
        }
        .to_string(),
        ssid: placeholder_if_empty(&wifi.ssid),
        ip: placeholder_if_empty(&wifi.ip),
        signal: wifi
            .rssi
            .map(|rssi| format!("{} ({} dBm)", signal_quality(rssi), rssi)),
    }
}

/// Coarse RSSI quality bands shown on the status page.
pub fn signal_quality(rssi: i32) -> &'static str {
    if rssi < -80 {
        "Poor"
    } else if rssi < -70 {
        "Fair"
    } else if rssi < -60 {
        "Good"
    } else {
        "Excellent"
    }
}

fn placeholder_if_empty(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
