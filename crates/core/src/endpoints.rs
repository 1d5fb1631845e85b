// REST and push surface exposed by the dispenser firmware.

pub const VOLUME_UNIT: &str = "/api/volumeunit";
pub const PRESETS: &str = "/api/presets";
pub const START: &str = "/api/start";
pub const PAUSE: &str = "/api/pause";
pub const RESUME: &str = "/api/resume";
pub const STOP: &str = "/api/stop";
pub const WIFI: &str = "/api/wifi";
pub const CALIBRATION: &str = "/api/calibration";
pub const WS_PATH: &str = "/ws";

pub fn http_base(host: &str, port: u16) -> String {
    format!("http://{}:{}", host, port)
}

pub fn ws_url(host: &str, port: u16) -> String {
    format!("ws://{}:{}{}", host, port, WS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_target_the_configured_host() {
        assert_eq!(http_base("192.168.4.1", 80), "http://192.168.4.1:80");
        assert_eq!(ws_url("dispenser.local", 8080), "ws://dispenser.local:8080/ws");
    }
}
