use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PARSE_FAILURE_MESSAGE: &str = "請求解析失敗，請確認資料格式。";
pub const INVALID_PARAMS_MESSAGE: &str = "無效的請求參數";

// ============ API Models ============

/// Body of `POST /api/check-address`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAddressRequest {
    pub address: String,
}

impl CheckAddressRequest {
    /// Parses a raw request body.
    ///
    /// Malformed JSON is a `Parse` error; valid JSON without a string
    /// `address` field is a `Validation` error.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Malformed request body: {}", e);
            AppError::Parse(PARSE_FAILURE_MESSAGE.to_string())
        })?;

        let address = value
            .get("address")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::Validation(INVALID_PARAMS_MESSAGE.to_string()))?;

        Ok(Self {
            address: address.to_string(),
        })
    }
}

/// Form submitted by the HTML page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckAddressForm {
    #[serde(default)]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_address() {
        let request = CheckAddressRequest::from_body(br#"{"address": "0xabc"}"#).unwrap();
        assert_eq!(request.address, "0xabc");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        match CheckAddressRequest::from_body(b"{address:") {
            Err(AppError::Parse(msg)) => assert_eq!(msg, PARSE_FAILURE_MESSAGE),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_or_non_string_address() {
        let bodies: [&[u8]; 3] = [b"{}", br#"{"address": 42}"#, b"[]"];
        for body in bodies {
            match CheckAddressRequest::from_body(body) {
                Err(AppError::Validation(msg)) => assert_eq!(msg, INVALID_PARAMS_MESSAGE),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }
}
