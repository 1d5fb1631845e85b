pub mod commands;
pub mod endpoints;
pub mod presets;
pub mod status;
pub mod units;

pub use commands::Command;
pub use presets::PresetSet;
pub use status::{
    CalibrationStatus, DeviceStatus, DispenseState, DispensingStatus, StateKind, WifiStatus,
};
pub use units::VolumeUnit;
