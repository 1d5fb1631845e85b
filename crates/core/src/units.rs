use serde::{Deserialize, Serialize};

/// Display unit selected by the operator. All storage and wire traffic is
/// in milliliters; display values are always derived through this type so
/// every volume crossing the device boundary is converted exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[default]
    #[serde(rename = "ml")]
    Milliliters,
    #[serde(rename = "l")]
    Liters,
}

pub const ML_PER_LITER: f64 = 1000.0;

impl VolumeUnit {
    /// Resolve a wire tag. Unrecognized or empty tags fall back to
    /// milliliters rather than failing.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "l" => VolumeUnit::Liters,
            _ => VolumeUnit::Milliliters,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "ml",
            VolumeUnit::Liters => "l",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "ml",
            VolumeUnit::Liters => "L",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "milliliters",
            VolumeUnit::Liters => "liters",
        }
    }

    pub fn to_display(self, milliliters: f64) -> f64 {
        match self {
            VolumeUnit::Milliliters => milliliters,
            VolumeUnit::Liters => milliliters / ML_PER_LITER,
        }
    }

    pub fn to_milliliters(self, display: f64) -> f64 {
        match self {
            VolumeUnit::Milliliters => display,
            VolumeUnit::Liters => display * ML_PER_LITER,
        }
    }

    /// Decimal places shown for this unit.
    pub fn decimals(self) -> usize {
        match self {
            VolumeUnit::Milliliters => 1,
            VolumeUnit::Liters => 3,
        }
    }

    /// Fixed-precision display value without suffix.
    pub fn format(self, milliliters: f64) -> String {
        format!("{:.*}", self.decimals(), self.to_display(milliliters))
    }

    pub fn format_with_suffix(self, milliliters: f64) -> String {
        format!("{} {}", self.format(milliliters), self.suffix())
    }
}
