use std::env;
use std::time::Duration;

use flowdose_core::endpoints;

/// Connection settings for a dispenser on the local network.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    pub host: String,
    pub port: u16,
    /// Fixed delay between reconnection attempts on the live channel.
    pub reconnect_delay: Duration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            // Factory-default AP address of the dispenser.
            host: "192.168.4.1".to_string(),
            port: 80,
            reconnect_delay: Duration::from_secs(3),
        }
    }
}

impl DeviceConfig {
    pub fn from_env() -> Self {
        let mut cfg = DeviceConfig::default();

        if let Ok(v) = env::var("FLOWDOSE_DEVICE_HOST") {
            if !v.is_empty() {
                cfg.host = v;
            }
        }
        if let Ok(v) = env::var("FLOWDOSE_DEVICE_PORT") {
            if let Ok(p) = v.parse::<u16>() {
                cfg.port = p;
            }
        }
        if let Ok(v) = env::var("FLOWDOSE_RECONNECT_SECS") {
            if let Ok(s) = v.parse::<u64>() {
                cfg.reconnect_delay = Duration::from_secs(s);
            }
        }

        cfg
    }

    pub fn http_base(&self) -> String {
        endpoints::http_base(&self.host, self.port)
    }

    pub fn ws_url(&self) -> String {
        endpoints::ws_url(&self.host, self.port)
    }
}
