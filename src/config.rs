use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_GOPLUS_BASE_URL: &str = "https://api.gopluslabs.io";
pub const DEFAULT_TIMEOUT_MS: u64 = 2500;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Kept optional so the client can report a missing key per request;
    /// `main` refuses to start without it.
    pub goplus_api_key: Option<String>,
    pub goplus_base_url: String,
    pub goplus_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            goplus_api_key: std::env::var("GOPLUS_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            goplus_base_url: std::env::var("GOPLUS_BASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|url| {
                    if !url.starts_with("http://") && !url.starts_with("https://") {
                        anyhow::bail!("GOPLUS_BASE_URL must start with http:// or https://");
                    }
                    Ok(url.trim_end_matches('/').to_string())
                })
                .transpose()?
                .unwrap_or_else(|| DEFAULT_GOPLUS_BASE_URL.to_string()),
            goplus_timeout_ms: match std::env::var("GOPLUS_TIMEOUT_MS") {
                Ok(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|ms| *ms > 0)
                    .ok_or_else(|| {
                        anyhow::anyhow!("GOPLUS_TIMEOUT_MS must be a positive number of milliseconds")
                    })?,
                Err(_) => DEFAULT_TIMEOUT_MS,
            },
        };

        // Never log the key itself
        tracing::debug!("GoPlus Base URL: {}", config.goplus_base_url);
        tracing::debug!("GoPlus timeout: {}ms", config.goplus_timeout_ms);
        tracing::debug!("Server Port: {}", config.port);
        if config.goplus_api_key.is_none() {
            tracing::warn!("GOPLUS_API_KEY is not set");
        }

        Ok(config)
    }

    /// Fails when the provider key is absent. Called once at startup.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        self.goplus_api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!("GOPLUS_API_KEY environment variable required")
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.goplus_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            goplus_api_key: None,
            goplus_base_url: DEFAULT_GOPLUS_BASE_URL.to_string(),
            goplus_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
