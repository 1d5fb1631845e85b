use serde::{Deserialize, Serialize};

/// Dispensing commands accepted by the device. Amounts are milliliters;
/// display-unit conversion happens before a command is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Command {
    Start { amount_ml: f64 },
    Pause,
    Resume,
    Stop,
}
