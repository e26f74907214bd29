use crate::address_validator::is_evm_address;
use crate::config::Config;
use crate::errors::{AppError, PROVIDER_FAILURE_MESSAGE};
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2500);

const ADDRESS_SECURITY_PATH: [&str; 3] = ["api", "v1", "address_security"];

/// Client for the GoPlus address-security API.
#[derive(Clone)]
pub struct GoPlusClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    default_timeout: Duration,
}

impl GoPlusClient {
    /// Creates a new `GoPlusClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the GoPlus API.
    /// * `api_key` - API key sent as `X-API-KEY`. A missing key is reported
    ///   on each lookup rather than here.
    pub fn new(base_url: String, api_key: Option<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            AppError::Internal(format!("Failed to create GoPlus client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            default_timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Ok(
            Self::new(config.goplus_base_url.clone(), config.goplus_api_key.clone())?
                .with_default_timeout(config.request_timeout()),
        )
    }

    /// Timeout used when a lookup does not pass its own.
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Lookup URL for an already normalized address.
    pub fn endpoint_for(&self, normalized: &str) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::Internal(format!("Invalid GoPlus base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Internal("GoPlus base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(ADDRESS_SECURITY_PATH)
            .push(normalized);
        Ok(url)
    }

    /// Fetches the security report for one address.
    ///
    /// The whole exchange runs under `timeout` (or the client default); on
    /// expiry the request future is dropped, which aborts the connection.
    ///
    /// # Returns
    ///
    /// * `Result<Value, AppError>` - The provider payload, unmodified.
    pub async fn fetch_address_security(
        &self,
        address: &str,
        timeout: Option<Duration>,
    ) -> Result<Value, AppError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AppError::Configuration(
                "Missing GoPlus API key. Set GOPLUS_API_KEY in environment variables.".to_string(),
            ));
        };

        let normalized = normalize_address(address);
        let url = self.endpoint_for(&normalized)?;
        let timeout = timeout.unwrap_or(self.default_timeout);

        tracing::info!("Fetching GoPlus address security for {}", normalized);

        match tokio::time::timeout(timeout, self.send(url, api_key)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("GoPlus lookup for {} timed out after {:?}", normalized, timeout);
                Err(AppError::Timeout)
            }
        }
    }

    async fn send(&self, url: Url, api_key: &str) -> Result<Value, AppError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .header("X-API-KEY", api_key)
            .send()
            .await?;

        let status = response.status();
        let payload: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                AppError::Timeout
            } else {
                AppError::Connectivity(format!("Failed to parse GoPlus response: {}", e))
            }
        })?;

        let code = payload.get("code").and_then(Value::as_i64);
        if !status.is_success() || code != Some(0) {
            let message = payload
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(PROVIDER_FAILURE_MESSAGE)
                .to_string();
            return Err(AppError::Provider {
                status: status.as_u16(),
                message,
                payload: Some(payload),
            });
        }

        tracing::debug!("GoPlus lookup succeeded");
        Ok(payload)
    }
}

/// Lower-cases EVM addresses, which are case-insensitive on chain. Other
/// families are case-sensitive and pass through trimmed.
pub fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    if is_evm_address(trimmed) {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}
