use tracing::warn;

use flowdose_core::{PresetSet, VolumeUnit};

use crate::gateway::DeviceGateway;

/// Outcome of a preset save, surfaced to the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved,
    /// Validation failed; nothing was sent to the device.
    Invalid,
    /// The device rejected the write; carries its error text.
    Failed(String),
}

/// Holds the four preset volumes in milliliters. The device is the
/// authority: saves re-hydrate from it, and a failed load falls back to
/// the defaults so presets never block the UI.
#[derive(Debug, Clone, Default)]
pub struct PresetStore {
    values: PresetSet,
}

impl PresetStore {
    pub fn set(&self) -> PresetSet {
        self.values
    }

    pub async fn load(&mut self, gateway: &DeviceGateway) {
        self.values = match gateway.presets().await {
            Ok(set) => set,
            Err(err) => {
                warn!(%err, "failed to load presets, using defaults");
                PresetSet::default()
            }
        };
    }

    /// Validate and persist four display-unit values. Each must be
    /// strictly positive or nothing is sent. The device may clamp or
    /// reject individual values, so a successful write re-reads the
    /// authoritative set.
    pub async fn save(
        &mut self,
        gateway: &DeviceGateway,
        display_values: [f64; 4],
        unit: VolumeUnit,
    ) -> SaveOutcome {
        if !display_values.iter().all(|v| *v > 0.0) {
            return SaveOutcome::Invalid;
        }

        let set = PresetSet(display_values.map(|v| unit.to_milliliters(v)));
        let response = gateway.set_presets(&set).await;
        if response.success {
            self.load(gateway).await;
            SaveOutcome::Saved
        } else {
            SaveOutcome::Failed(
                response
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string()),
            )
        }
    }
}
