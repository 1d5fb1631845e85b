use serde::{Deserialize, Serialize};

/// The four operator presets, stored in milliliters. Display values are
/// derived through the active unit, never stored. Wire shape is the flat
/// `preset1..preset4` object the firmware uses in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PresetWire", into = "PresetWire")]
pub struct PresetSet(pub [f64; 4]);

impl PresetSet {
    pub const LEN: usize = 4;

    pub fn values(&self) -> &[f64; 4] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }
}

impl Default for PresetSet {
    fn default() -> Self {
        Self([100.0, 250.0, 500.0, 1000.0])
    }
}

#[derive(Serialize, Deserialize)]
struct PresetWire {
    preset1: f64,
    preset2: f64,
    preset3: f64,
    preset4: f64,
}

impl From<PresetWire> for PresetSet {
    fn from(wire: PresetWire) -> Self {
        Self([wire.preset1, wire.preset2, wire.preset3, wire.preset4])
    }
}

impl From<PresetSet> for PresetWire {
    fn from(set: PresetSet) -> Self {
        Self {
            preset1: set.0[0],
            preset2: set.0[1],
            preset3: set.0[2],
            preset4: set.0[3],
        }
    }
}
