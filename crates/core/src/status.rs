use serde::{Deserialize, Serialize};

/// Raw dispensing state as tagged by the device. The firmware owns the
/// state machine; the client never infers transitions, it only classifies
/// the most recently received tag for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DispenseState(String);

/// Rendering class of a state tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Idle,
    Dispensing,
    Paused,
    Completed,
    Error,
    /// Tag the client does not recognize (e.g. "stopping"). Shown on the
    /// badge verbatim, leaves the rest of the screen alone.
    Other,
}

impl DispenseState {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Any tag containing "error" classifies as an error, so the firmware
    /// can emit differentiated subtypes ("error_timeout", "error_no_flow")
    /// without a client-side enumeration.
    pub fn kind(&self) -> StateKind {
        match self.0.as_str() {
            "idle" => StateKind::Idle,
            "dispensing" => StateKind::Dispensing,
            "paused" => StateKind::Paused,
            "completed" => StateKind::Completed,
            tag if tag.contains("error") => StateKind::Error,
            _ => StateKind::Other,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind() == StateKind::Error
    }
}

impl From<&str> for DispenseState {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Progress of the current (or last) dispense run, volumes in milliliters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispensingStatus {
    pub state: DispenseState,
    pub dispensed: f64,
    pub target: f64,
    pub remaining: f64,
    pub progress: u8,
    #[serde(default, rename = "valveOpen")]
    pub valve_open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiStatus {
    pub connected: bool,
    pub ssid: String,
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rssi: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationStatus {
    #[serde(rename = "pulsesPerLiter")]
    pub pulses_per_liter: f64,
}

/// One frame on the live channel. The volume unit and presets are fetched
/// separately over REST and are deliberately not part of the push payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub dispensing: DispensingStatus,
    pub wifi: WifiStatus,
    pub calibration: CalibrationStatus,
}
