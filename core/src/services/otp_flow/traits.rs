//! Traits for the collaborators the OTP flow drives

use async_trait::async_trait;

use crate::domain::entities::user::SessionUser;
use crate::errors::GatewayError;

use super::types::{SendCodeResponse, Toast, VerifyCodeResponse};

/// Trait for the auth backend gateway
///
/// Implementations resolve ordinary server-level rejections as responses
/// with `success = false` and return `Err` only for transport failures.
#[async_trait]
pub trait AuthApiTrait: Send + Sync {
    /// Verify an OTP code for a phone number
    async fn verify_code(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerifyCodeResponse, GatewayError>;

    /// Request a new OTP code be sent to a phone number
    async fn send_code(&self, phone: &str) -> Result<SendCodeResponse, GatewayError>;
}

/// Trait for the session/auth collaborator that persists login state
#[async_trait]
pub trait SessionStoreTrait: Send + Sync {
    /// Persist the logged-in session after a successful verification
    async fn login(&self, token: &str, user: &SessionUser) -> Result<(), String>;
}

/// Trait for the transient notification surface
pub trait NotifierTrait: Send + Sync {
    /// Show a toast to the user
    fn notify(&self, toast: Toast);
}
