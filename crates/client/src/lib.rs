pub mod config;
pub mod gateway;
pub mod live;
pub mod presets;
pub mod session;

pub use config::DeviceConfig;
pub use gateway::{ApiResponse, DeviceGateway, GatewayError};
pub use live::{LiveEvent, LiveStateClient};
pub use presets::{PresetStore, SaveOutcome};
pub use session::{CommandFeedback, DeviceSession};
