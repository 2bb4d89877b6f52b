//! OTP verification flow module
//!
//! This module drives the phone/OTP verification screen:
//! - Per-slot digit entry, bulk paste, and backspace handling
//! - Auto-focus and auto-submit when the entry completes
//! - Verify and resend calls with a single-flight `loading` guard
//! - The resend cooldown countdown
//! - Login hand-off to the session store on success

mod config;
mod controller;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpFlowConfig;
pub use controller::OtpFlowController;
pub use traits::{AuthApiTrait, NotifierTrait, SessionStoreTrait};
pub use types::{FlowSnapshot, SendCodeResponse, Toast, ToastKind, VerifyCodeResponse};
