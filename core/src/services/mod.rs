//! Client services containing flow logic and collaborator seams.

pub mod otp_flow;

// Re-export commonly used types
pub use otp_flow::{
    AuthApiTrait, FlowSnapshot, NotifierTrait, OtpFlowConfig, OtpFlowController,
    SendCodeResponse, SessionStoreTrait, Toast, ToastKind, VerifyCodeResponse,
};
