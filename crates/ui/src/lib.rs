pub mod reflect;
pub mod view;

pub use reflect::{preset_buttons, reflect, signal_quality};
pub use view::{
    Badge, BadgeTone, Controls, PresetButton, Screen, Section, ViewModel, WifiView,
};
