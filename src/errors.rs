use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::fmt;

/// Shown for failures whose details must not reach the client.
pub const GENERIC_ERROR_MESSAGE: &str = "系統發生錯誤，請稍後再試。";
pub const TIMEOUT_MESSAGE: &str = "GoPlus API timeout";
pub const CONNECTIVITY_MESSAGE: &str = "Unable to reach GoPlus API";
pub const PROVIDER_FAILURE_MESSAGE: &str = "GoPlus API request failed";

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Request body failed structural or address-format validation.
    Validation(String),
    /// Request body is not valid JSON.
    Parse(String),
    /// Required configuration (the provider API key) is missing.
    Configuration(String),
    /// The provider call did not finish within the timeout.
    Timeout,
    /// DNS, connection or TLS failure reaching the provider. The detail is
    /// logged, never returned to the client.
    Connectivity(String),
    /// The provider answered with a non-2xx status or a non-zero `code`.
    Provider {
        status: u16,
        message: String,
        /// Provider body, forwarded unchanged.
        payload: Option<Value>,
    },
    /// Anything unexpected.
    Internal(String),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Parse(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Connectivity(_) => StatusCode::BAD_GATEWAY,
            AppError::Provider { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }

    /// Message safe to show to an end user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Parse(msg) | AppError::Configuration(msg) => {
                msg.clone()
            }
            AppError::Timeout => TIMEOUT_MESSAGE.to_string(),
            AppError::Connectivity(_) => CONNECTIVITY_MESSAGE.to_string(),
            AppError::Provider { message, .. } => message.clone(),
            AppError::Internal(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// JSON body of the error response.
    pub fn response_body(&self) -> Value {
        match self {
            AppError::Validation(msg) | AppError::Parse(msg) => json!({
                "success": false,
                "error": msg,
            }),
            AppError::Provider {
                payload: Some(payload),
                ..
            } => payload.clone(),
            _ => json!({
                "code": self.status_code().as_u16(),
                "message": self.user_message(),
            }),
        }
    }
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Timeout => write!(f, "{}", TIMEOUT_MESSAGE),
            AppError::Connectivity(msg) => write!(f, "{}: {}", CONNECTIVITY_MESSAGE, msg),
            AppError::Provider {
                status, message, ..
            } => write!(f, "Provider error {}: {}", status, message),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Logs once here, at the response boundary, with a level matching the
    /// severity.
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(msg) | AppError::Parse(msg) => {
                tracing::debug!("Rejected request: {}", msg);
            }
            AppError::Provider {
                status, message, ..
            } => {
                tracing::warn!("GoPlus rejected request ({}): {}", status, message);
            }
            AppError::Timeout => tracing::error!("{}", TIMEOUT_MESSAGE),
            AppError::Connectivity(detail) => {
                tracing::error!("{}: {}", CONNECTIVITY_MESSAGE, detail)
            }
            AppError::Configuration(msg) => tracing::error!("Configuration error: {}", msg),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
        }

        (self.status_code(), Json(self.response_body())).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    /// Converts a `reqwest::Error` into an `AppError`.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else {
            AppError::Connectivity(err.to_string())
        }
    }
}
