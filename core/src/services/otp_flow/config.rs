//! Configuration for the OTP flow controller

use crate::domain::entities::session::RESEND_COOLDOWN_SECONDS;

/// Configuration for the OTP flow controller
#[derive(Debug, Clone)]
pub struct OtpFlowConfig {
    /// Seconds the user must wait between resend requests
    pub resend_cooldown_seconds: u32,
    /// Delay before the initial focus/auto-submit, letting the input surface mount
    pub mount_focus_delay_ms: u64,
}

impl Default for OtpFlowConfig {
    fn default() -> Self {
        Self {
            resend_cooldown_seconds: RESEND_COOLDOWN_SECONDS,
            mount_focus_delay_ms: 300,
        }
    }
}

impl OtpFlowConfig {
    /// Set the resend cooldown in seconds
    pub fn with_resend_cooldown_seconds(mut self, seconds: u32) -> Self {
        self.resend_cooldown_seconds = seconds;
        self
    }
}
