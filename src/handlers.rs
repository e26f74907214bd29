use crate::address_validator::validate_address;
use crate::config::Config;
use crate::errors::AppError;
use crate::goplus_client::GoPlusClient;
use crate::models::CheckAddressRequest;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the GoPlus address-security API.
    pub goplus_client: GoPlusClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let goplus_client = GoPlusClient::from_config(&config)?;
        Ok(Self {
            config,
            goplus_client,
        })
    }
}

/// Health check endpoint.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-wallet-risk-api",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Validates `raw_address` and fetches its GoPlus report.
///
/// Shared by the JSON endpoint and the HTML page. Invalid input never reaches
/// the network.
pub async fn lookup_address(state: &AppState, raw_address: &str) -> Result<Value, AppError> {
    let candidate = validate_address(raw_address)?;
    tracing::info!("Checking {} address {}", candidate.chain, candidate.address);

    state
        .goplus_client
        .fetch_address_security(&candidate.address, None)
        .await
}

/// POST /api/check-address
///
/// Accepts `{"address": "..."}` and responds with the GoPlus payload
/// unchanged. Errors are translated once, by `AppError::into_response`.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `body` - Raw request body; parsed here so malformed JSON gets the
///   localized 400 body instead of the extractor's rejection.
pub async fn check_address(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let request = CheckAddressRequest::from_body(&body)?;
    let payload = lookup_address(&state, &request.address).await?;
    Ok(Json(payload))
}
