//! Types exchanged between the flow controller and its collaborators

use crate::domain::entities::otp_entry::OTP_LENGTH;
use crate::domain::entities::session::FlowPhase;

/// Result of a verify call against the auth backend
#[derive(Debug, Clone)]
pub struct VerifyCodeResponse {
    /// Whether the server accepted the code
    pub success: bool,
    /// Server-provided message, if any
    pub message: Option<String>,
    /// Session token issued on success (empty when the server sent none)
    pub token: String,
}

/// Result of a (re)send call against the auth backend
#[derive(Debug, Clone)]
pub struct SendCodeResponse {
    /// Whether the server accepted the request
    pub success: bool,
    /// Server-provided message, if any
    pub message: Option<String>,
}

/// Kind of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Transient notification handed to the notifier collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

impl Toast {
    /// Success toast
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Read-only view of the flow state for UI binding
#[derive(Debug, Clone)]
pub struct FlowSnapshot {
    /// Current phase of the flow
    pub phase: FlowPhase,
    /// The per-slot entry as shown in the input boxes
    pub slots: [Option<char>; OTP_LENGTH],
    /// User-visible error message, if any
    pub error: Option<String>,
    /// True while a verify or resend call is in flight
    pub loading: bool,
    /// Seconds remaining until resend is allowed
    pub resend_timer: u32,
    /// Whether the resend control is enabled
    pub can_resend: bool,
    /// Slot the input surface should focus
    pub focused_slot: usize,
}
