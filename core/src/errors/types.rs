//! Error definitions for the gateway boundary and the user-visible flow.

use thiserror::Error;

/// Generic fallback shown when a verify call fails without a usable message
pub(crate) const GENERIC_VERIFY_FAILURE: &str = "Verification failed. Please try again.";

/// Shown when the server rejects a code without a message of its own
pub(crate) const GENERIC_INVALID_CODE: &str = "Invalid OTP. Please try again.";

/// Shown when a resend fails without a usable message
pub(crate) const GENERIC_RESEND_FAILURE: &str = "Failed to resend OTP";

/// Transport-level failures from the auth backend gateway
///
/// The gateway resolves ordinary server-level rejections as responses with
/// `success = false`; these errors cover the cases where no server-level
/// answer was obtained at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request never reached the server or the connection dropped
    #[error("{message}")]
    Transport { message: String },

    /// The request timed out
    #[error("Request timed out")]
    Timeout,

    /// A response arrived but could not be decoded
    #[error("Unexpected response from server")]
    InvalidResponse,
}

/// User-visible failures of the verification flow
///
/// `Display` renders the message shown on screen. These never propagate out
/// of a flow operation; they are stored on the session's `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The entered code is shorter than the full OTP length
    #[error("Please enter complete OTP")]
    IncompleteInput,

    /// The server rejected the code
    #[error("{0}")]
    InvalidCode(String),

    /// The verify call failed before a server-level answer was obtained
    #[error("{0}")]
    VerificationFailed(String),

    /// The resend call failed
    #[error("{0}")]
    ResendFailed(String),
}

impl FlowError {
    /// Rejection error from an optional server message
    pub fn invalid_code(message: Option<String>) -> Self {
        Self::InvalidCode(message.unwrap_or_else(|| GENERIC_INVALID_CODE.to_string()))
    }

    /// Verify failure from a transport error, falling back to the generic message
    pub fn verification_failed(err: &GatewayError) -> Self {
        match err {
            GatewayError::Transport { message } if !message.is_empty() => {
                Self::VerificationFailed(message.clone())
            }
            _ => Self::VerificationFailed(GENERIC_VERIFY_FAILURE.to_string()),
        }
    }

    /// Resend failure from an optional server or transport message
    pub fn resend_failed(message: Option<String>) -> Self {
        Self::ResendFailed(message.unwrap_or_else(|| GENERIC_RESEND_FAILURE.to_string()))
    }

    /// Resend failure from a transport error, falling back to the generic message
    pub fn resend_failed_from(err: &GatewayError) -> Self {
        match err {
            GatewayError::Transport { message } if !message.is_empty() => {
                Self::ResendFailed(message.clone())
            }
            _ => Self::ResendFailed(GENERIC_RESEND_FAILURE.to_string()),
        }
    }

    /// Failure of the login hand-off after a successful server verify
    pub fn login_failed(message: String) -> Self {
        if message.is_empty() {
            Self::VerificationFailed(GENERIC_VERIFY_FAILURE.to_string())
        } else {
            Self::VerificationFailed(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_input_message() {
        assert_eq!(
            FlowError::IncompleteInput.to_string(),
            "Please enter complete OTP"
        );
    }

    #[test]
    fn test_invalid_code_falls_back() {
        assert_eq!(
            FlowError::invalid_code(None).to_string(),
            "Invalid OTP. Please try again."
        );
        assert_eq!(
            FlowError::invalid_code(Some("Code expired".to_string())).to_string(),
            "Code expired"
        );
    }

    #[test]
    fn test_verification_failed_surfaces_transport_message() {
        let err = GatewayError::Transport {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            FlowError::verification_failed(&err).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_verification_failed_generic_fallback() {
        assert_eq!(
            FlowError::verification_failed(&GatewayError::InvalidResponse).to_string(),
            "Verification failed. Please try again."
        );
        assert_eq!(
            FlowError::verification_failed(&GatewayError::Timeout).to_string(),
            "Verification failed. Please try again."
        );
    }

    #[test]
    fn test_resend_failed_falls_back() {
        assert_eq!(
            FlowError::resend_failed(None).to_string(),
            "Failed to resend OTP"
        );
    }
}
