//! Verification session state for one visit of the OTP screen.

use serde::{Deserialize, Serialize};

use crate::domain::entities::otp_entry::OtpEntry;
use crate::errors::FlowError;

/// Default resend cooldown in seconds
pub const RESEND_COOLDOWN_SECONDS: u32 = 60;

/// Phase of the verification flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowPhase {
    /// Accepting digit entry
    Entering,
    /// Exactly one verify or resend call is outstanding
    Submitting,
    /// Terminal: the code was accepted and the login side effect ran
    Verified,
}

/// Per-screen-visit verification session
///
/// Created when the OTP screen is entered and dropped when the screen is
/// torn down; never persisted. Invariant: `can_resend` holds exactly when
/// `resend_timer == 0`.
#[derive(Debug, Clone)]
pub struct VerificationSession {
    /// Phone number the code was sent to (opaque, supplied by the caller)
    pub phone: String,

    /// The per-slot code entry
    pub entry: OtpEntry,

    /// Current phase of the flow
    pub phase: FlowPhase,

    /// True while a verify or resend call is in flight
    pub loading: bool,

    /// User-visible error from the last failed operation
    pub error: Option<FlowError>,

    /// Seconds remaining until a resend is allowed
    pub resend_timer: u32,

    /// Whether the user may request a new code
    pub can_resend: bool,

    /// Slot the input surface should focus
    pub focused_slot: usize,
}

impl VerificationSession {
    /// Creates a session with the cooldown running
    pub fn new(phone: impl Into<String>, cooldown_seconds: u32) -> Self {
        Self {
            phone: phone.into(),
            entry: OtpEntry::new(),
            phase: FlowPhase::Entering,
            loading: false,
            error: None,
            resend_timer: cooldown_seconds,
            can_resend: cooldown_seconds == 0,
            focused_slot: 0,
        }
    }

    /// Advances the resend countdown by one second
    ///
    /// Returns `true` while the countdown should keep ticking. Reaching 0
    /// flips `can_resend`; a tick at 0 is a no-op (the timer never goes
    /// negative).
    pub fn tick(&mut self) -> bool {
        if self.resend_timer > 0 {
            self.resend_timer -= 1;
        }
        if self.resend_timer == 0 {
            self.can_resend = true;
            false
        } else {
            true
        }
    }

    /// Restarts the resend cooldown after a successful resend
    pub fn reset_cooldown(&mut self, cooldown_seconds: u32) {
        self.resend_timer = cooldown_seconds;
        self.can_resend = cooldown_seconds == 0;
    }

    /// Wipes the entry and moves focus back to the first slot
    pub fn reset_entry(&mut self) {
        self.entry.clear();
        self.focused_slot = 0;
    }
}
