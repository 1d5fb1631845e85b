use tracing::{info, warn};

use flowdose_core::{Command, PresetSet, VolumeUnit};

use crate::gateway::{ApiResponse, DeviceGateway};
use crate::presets::{PresetStore, SaveOutcome};

/// Acknowledgment for an operator-triggered action.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandFeedback {
    Accepted,
    /// Rejected before any network I/O.
    Rejected(String),
    /// The request went out and failed; carries the device's error text.
    Failed(String),
}

/// The process-wide mutable state as one explicit context: active unit,
/// presets, and the gateway they hydrate through. Single owner, last
/// write wins; a unit change racing a preset save is tolerated at human
/// interaction rates.
pub struct DeviceSession {
    gateway: DeviceGateway,
    unit: VolumeUnit,
    presets: PresetStore,
}

impl DeviceSession {
    pub fn new(gateway: DeviceGateway) -> Self {
        Self {
            gateway,
            unit: VolumeUnit::default(),
            presets: PresetStore::default(),
        }
    }

    pub fn unit(&self) -> VolumeUnit {
        self.unit
    }

    pub fn presets(&self) -> PresetSet {
        self.presets.set()
    }

    pub fn gateway(&self) -> &DeviceGateway {
        &self.gateway
    }

    /// Initial hydration: unit first, then presets, so preset displays
    /// derive through the freshly loaded unit. Both loads fall back to
    /// defaults on failure.
    pub async fn hydrate(&mut self) {
        self.unit = match self.gateway.volume_unit().await {
            Ok(unit) => unit,
            Err(err) => {
                warn!(%err, "failed to load volume unit, falling back to milliliters");
                VolumeUnit::Milliliters
            }
        };
        self.presets.load(&self.gateway).await;
    }

    /// Switch the display unit. The local selection sticks even if the
    /// device rejects the write; presets reload so displays re-derive.
    pub async fn select_unit(&mut self, unit: VolumeUnit) {
        self.unit = unit;
        let response = self.gateway.set_volume_unit(unit).await;
        if !response.success {
            warn!(error = ?response.error, "failed to persist volume unit");
        }
        self.presets.load(&self.gateway).await;
        info!(unit = unit.tag(), "volume unit changed");
    }

    pub async fn save_presets(&mut self, display_values: [f64; 4]) -> SaveOutcome {
        self.presets
            .save(&self.gateway, display_values, self.unit)
            .await
    }

    /// Start dispensing `amount` expressed in the active display unit.
    pub async fn dispense(&self, amount: f64) -> CommandFeedback {
        if !(amount > 0.0) {
            return CommandFeedback::Rejected("amount must be greater than 0".to_string());
        }
        self.run(Command::Start {
            amount_ml: self.unit.to_milliliters(amount),
        })
        .await
    }

    /// Start dispensing a preset; stored values are already milliliters.
    pub async fn dispense_preset(&self, index: usize) -> CommandFeedback {
        match self.presets.set().get(index) {
            Some(amount_ml) => self.run(Command::Start { amount_ml }).await,
            None => CommandFeedback::Rejected(format!("no preset {}", index + 1)),
        }
    }

    pub async fn run(&self, command: Command) -> CommandFeedback {
        let response = match command {
            Command::Start { amount_ml } => {
                if !(amount_ml > 0.0) {
                    return CommandFeedback::Rejected(
                        "amount must be greater than 0".to_string(),
                    );
                }
                self.gateway.start(amount_ml).await
            }
            Command::Pause => self.gateway.pause().await,
            Command::Resume => self.gateway.resume().await,
            Command::Stop => self.gateway.stop().await,
        };
        ack(response)
    }

    pub async fn configure_wifi(&self, ssid: &str, password: &str) -> CommandFeedback {
        if ssid.is_empty() {
            return CommandFeedback::Rejected("ssid must not be empty".to_string());
        }
        ack(self.gateway.set_wifi(ssid, password).await)
    }

    pub async fn save_calibration(&self, pulses_per_liter: f64) -> CommandFeedback {
        if !(pulses_per_liter > 0.0) {
            return CommandFeedback::Rejected(
                "pulses per liter must be greater than 0".to_string(),
            );
        }
        ack(self.gateway.set_calibration(pulses_per_liter).await)
    }
}

fn ack(response: ApiResponse) -> CommandFeedback {
    if response.success {
        CommandFeedback::Accepted
    } else {
        CommandFeedback::Failed(
            response
                .error
                .unwrap_or_else(|| "Unknown error".to_string()),
        )
    }
}
