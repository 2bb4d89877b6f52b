//! reqwest-backed implementation of the auth backend gateway

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use rl_core::errors::GatewayError;
use rl_core::services::otp_flow::{AuthApiTrait, SendCodeResponse, VerifyCodeResponse};
use rl_shared::config::ApiConfig;
use rl_shared::types::ApiResponse;
use rl_shared::utils::phone::mask_phone;

/// Request body for the verify endpoint
#[derive(Debug, Serialize)]
struct VerifyCodeRequest<'a> {
    phone: &'a str,
    otp: &'a str,
}

/// Request body for the send endpoint
#[derive(Debug, Serialize)]
struct SendCodeRequest<'a> {
    phone: &'a str,
}

/// Payload of a successful verify response
#[derive(Debug, Deserialize)]
struct VerifyCodeData {
    /// Session token; empty when the server sent none
    #[serde(default)]
    token: String,
}

/// HTTP gateway to the auth backend
///
/// Server-level rejections resolve as responses with `success = false`;
/// `Err` is reserved for transport failures (connection, timeout, or an
/// undecodable body), matching the gateway contract the flow controller
/// expects.
pub struct HttpAuthApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpAuthApi {
    /// Create a gateway from an API configuration
    pub fn new(config: ApiConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Transport {
                message: e.to_string(),
            })?;
        info!(base_url = %config.base_url, "Auth gateway initialized");
        Ok(Self { client, config })
    }

    /// Create a gateway from environment variables
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(ApiConfig::from_env())
    }

    async fn post_json<T>(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse<T>, GatewayError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        response.json::<ApiResponse<T>>().await.map_err(|e| {
            error!(error = %e, "Failed to decode backend response");
            GatewayError::InvalidResponse
        })
    }
}

fn map_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport {
            message: err.to_string(),
        }
    }
}

fn into_verify_response(envelope: ApiResponse<VerifyCodeData>) -> VerifyCodeResponse {
    let ApiResponse {
        success,
        data,
        error,
        ..
    } = envelope;
    VerifyCodeResponse {
        success,
        message: error,
        token: data.map(|d| d.token).unwrap_or_default(),
    }
}

#[async_trait]
impl AuthApiTrait for HttpAuthApi {
    async fn verify_code(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerifyCodeResponse, GatewayError> {
        debug!(
            phone = %mask_phone(phone),
            event = "verify_code_request",
            "Posting OTP verification"
        );
        let envelope = self
            .post_json::<VerifyCodeData>(
                &self.config.verify_code_url(),
                &VerifyCodeRequest { phone, otp: code },
            )
            .await?;
        Ok(into_verify_response(envelope))
    }

    async fn send_code(&self, phone: &str) -> Result<SendCodeResponse, GatewayError> {
        info!(
            phone = %mask_phone(phone),
            event = "send_code_request",
            "Requesting OTP delivery"
        );
        let envelope = self
            .post_json::<serde_json::Value>(
                &self.config.send_code_url(),
                &SendCodeRequest { phone },
            )
            .await?;
        Ok(SendCodeResponse {
            success: envelope.success,
            message: envelope.error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_request_body_shape() {
        let body = VerifyCodeRequest {
            phone: "+15551234567",
            otp: "123456",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["phone"], "+15551234567");
        assert_eq!(json["otp"], "123456");
    }

    #[test]
    fn test_send_request_body_shape() {
        let body = SendCodeRequest {
            phone: "+15551234567",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"phone": "+15551234567"}));
    }

    #[test]
    fn test_success_envelope_maps_to_verify_response() {
        let envelope: ApiResponse<VerifyCodeData> = serde_json::from_str(
            r#"{"success": true, "data": {"token": "abc123"}}"#,
        )
        .unwrap();
        let response = into_verify_response(envelope);
        assert!(response.success);
        assert_eq!(response.token, "abc123");
        assert!(response.message.is_none());
    }

    #[test]
    fn test_rejection_envelope_maps_to_verify_response() {
        let envelope: ApiResponse<VerifyCodeData> =
            serde_json::from_str(r#"{"success": false, "error": "Invalid OTP"}"#).unwrap();
        let response = into_verify_response(envelope);
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Invalid OTP"));
        assert_eq!(response.token, "");
    }

    #[test]
    fn test_token_defaults_when_missing() {
        let envelope: ApiResponse<VerifyCodeData> =
            serde_json::from_str(r#"{"success": true, "data": {}}"#).unwrap();
        let response = into_verify_response(envelope);
        assert!(response.success);
        assert_eq!(response.token, "");
    }
}
