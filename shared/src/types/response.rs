//! API response envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard response wrapper returned by the backend
///
/// Deserialization is lenient: only `success` is required, so the client
/// tolerates older backends that omit timestamps or request IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Response data (present on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error message (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Response timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Request ID for tracing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Some(Utc::now()),
            request_id: None,
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            timestamp: Some(Utc::now()),
            request_id: None,
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TokenData {
        token: String,
    }

    #[test]
    fn test_deserialize_minimal_body() {
        let response: ApiResponse<TokenData> =
            serde_json::from_str(r#"{"success": false, "error": "Invalid OTP"}"#).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.error.as_deref(), Some("Invalid OTP"));
        assert!(response.data.is_none());
        assert!(response.timestamp.is_none());
    }

    #[test]
    fn test_deserialize_full_body() {
        let response: ApiResponse<TokenData> = serde_json::from_str(
            r#"{
                "success": true,
                "data": {"token": "abc123"},
                "timestamp": "2025-03-14T12:00:00Z",
                "request_id": "req-1"
            }"#,
        )
        .unwrap();
        assert!(response.is_success());
        assert_eq!(
            response.into_data(),
            Some(TokenData {
                token: "abc123".to_string()
            })
        );
    }

    #[test]
    fn test_success_constructor() {
        let response = ApiResponse::success(42u32);
        assert!(response.is_success());
        assert_eq!(response.data, Some(42));
        assert!(response.error.is_none());
    }
}
