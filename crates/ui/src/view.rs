/// Which of the two page sections is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Main,
    Progress,
}

/// Control group shown alongside the progress section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Controls {
    #[default]
    None,
    /// pause + stop
    Dispensing,
    /// resume + stop
    Paused,
}

/// Badge tone derived from the device state tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Idle,
    Dispensing,
    Paused,
    Error,
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    /// The raw device state, uppercased.
    pub label: String,
    pub tone: BadgeTone,
}

/// One regenerated preset button: formatted label plus the milliliter
/// amount a tap dispenses.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetButton {
    pub label: String,
    pub amount_ml: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WifiView {
    /// Status-bar line, e.g. `WiFi: workshop (192.168.1.23)`.
    pub summary: String,
    pub connected_label: String,
    pub ssid: String,
    pub ip: String,
    /// Quality band plus raw dBm, absent when the device omits rssi.
    pub signal: Option<String>,
}

/// The full set of view mutations produced by one reflection pass.
/// `section` and `controls` are `None` when the push leaves them
/// unchanged (error and unrecognized states touch only the badge).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub badge: Badge,
    pub section: Option<Section>,
    pub controls: Option<Controls>,
    pub dispensed: String,
    pub target: String,
    pub remaining: String,
    pub progress_percent: u8,
    pub valve_open: bool,
    pub calibration: String,
    pub wifi: WifiView,
    pub preset_buttons: Vec<PresetButton>,
    pub unit_hint: String,
}

/// Retained screen state the mutations apply to. Applying the same view
/// model twice changes nothing after the first application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub section: Section,
    pub controls: Controls,
    pub badge: Option<Badge>,
}

impl Screen {
    pub fn apply(&mut self, view: &ViewModel) {
        self.badge = Some(view.badge.clone());
        if let Some(section) = view.section {
            self.section = section;
        }
        if let Some(controls) = view.controls {
            self.controls = controls;
        }
    }
}
