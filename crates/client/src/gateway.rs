use serde::{Deserialize, Serialize};
use tracing::warn;

use flowdose_core::endpoints;
use flowdose_core::{PresetSet, VolumeUnit};

use crate::config::DeviceConfig;

/// Uniform result of a command-style endpoint. The firmware replies
/// `{success, error?}` and sometimes a human-readable `message`; a body
/// that omits `success` counts as a bare ack.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl ApiResponse {
    fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            message: None,
        }
    }
}

/// Failure of a fetch-style endpoint. Callers decide the fallback policy;
/// the gateway only reports what the transport did.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct UnitForm<'a> {
    unit: &'a str,
}

#[derive(Serialize)]
struct StartForm {
    amount: f64,
}

#[derive(Serialize)]
struct WifiForm<'a> {
    ssid: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct CalibrationForm {
    #[serde(rename = "pulsesPerLiter")]
    pulses_per_liter: f64,
}

/// Stateless request/response wrapper over the dispenser's REST surface.
/// One method per device capability, one best-effort request per call; no
/// retry, no validation beyond building the request. Numeric and domain
/// validation belong to the callers.
#[derive(Debug, Clone)]
pub struct DeviceGateway {
    http: reqwest::Client,
    base: String,
}

impl DeviceGateway {
    pub fn new(config: &DeviceConfig) -> Self {
        Self::with_base(config.http_base())
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
        }
    }

    pub async fn start(&self, amount_ml: f64) -> ApiResponse {
        self.post_form(endpoints::START, &StartForm { amount: amount_ml })
            .await
    }

    pub async fn pause(&self) -> ApiResponse {
        self.post_empty(endpoints::PAUSE).await
    }

    pub async fn resume(&self) -> ApiResponse {
        self.post_empty(endpoints::RESUME).await
    }

    pub async fn stop(&self) -> ApiResponse {
        self.post_empty(endpoints::STOP).await
    }

    pub async fn set_wifi(&self, ssid: &str, password: &str) -> ApiResponse {
        self.post_form(endpoints::WIFI, &WifiForm { ssid, password })
            .await
    }

    pub async fn set_calibration(&self, pulses_per_liter: f64) -> ApiResponse {
        self.post_form(endpoints::CALIBRATION, &CalibrationForm { pulses_per_liter })
            .await
    }

    /// Current display unit. Unknown tags resolve to milliliters.
    pub async fn volume_unit(&self) -> Result<VolumeUnit, GatewayError> {
        #[derive(Deserialize)]
        struct UnitPayload {
            unit: String,
        }

        let payload: UnitPayload = self
            .http
            .get(self.url(endpoints::VOLUME_UNIT))
            .send()
            .await?
            .json()
            .await?;
        Ok(VolumeUnit::from_tag(&payload.unit))
    }

    pub async fn set_volume_unit(&self, unit: VolumeUnit) -> ApiResponse {
        self.post_form(endpoints::VOLUME_UNIT, &UnitForm { unit: unit.tag() })
            .await
    }

    pub async fn presets(&self) -> Result<PresetSet, GatewayError> {
        let set = self
            .http
            .get(self.url(endpoints::PRESETS))
            .send()
            .await?
            .json()
            .await?;
        Ok(set)
    }

    /// All four presets in one atomic write, milliliters.
    pub async fn set_presets(&self, presets: &PresetSet) -> ApiResponse {
        self.post_form(endpoints::PRESETS, presets).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn post_empty(&self, path: &str) -> ApiResponse {
        self.read_response(path, self.http.post(self.url(path)).send().await)
            .await
    }

    async fn post_form<F: Serialize + ?Sized>(&self, path: &str, form: &F) -> ApiResponse {
        self.read_response(path, self.http.post(self.url(path)).form(form).send().await)
            .await
    }

    /// Folds transport failure (unreachable device, non-JSON body) into the
    /// uniform failure shape; a JSON body passes through verbatim whatever
    /// the HTTP status, matching the firmware's error responses.
    async fn read_response(
        &self,
        path: &str,
        sent: Result<reqwest::Response, reqwest::Error>,
    ) -> ApiResponse {
        let result = match sent {
            Ok(response) => response.json::<ApiResponse>().await,
            Err(err) => Err(err),
        };
        match result {
            Ok(body) => body,
            Err(err) => {
                warn!(%err, path, "device request failed");
                ApiResponse::transport_failure(err.to_string())
            }
        }
    }
}
