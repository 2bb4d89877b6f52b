//! OTP verification flow controller implementation

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;

use rl_shared::utils::format::format_countdown;
use rl_shared::utils::phone::{mask_phone, mask_phone_display};

use crate::domain::entities::otp_entry::{OtpEntry, OTP_LENGTH};
use crate::domain::entities::session::{FlowPhase, VerificationSession};
use crate::domain::entities::user::SessionUser;
use crate::errors::FlowError;

use super::config::OtpFlowConfig;
use super::traits::{AuthApiTrait, NotifierTrait, SessionStoreTrait};
use super::types::{FlowSnapshot, Toast};

/// Controller for the OTP verification flow
///
/// One controller exists per visit of the verification screen. It owns the
/// [`VerificationSession`] state, drives the auth backend gateway, hands a
/// successful login to the session store, and runs the resend cooldown
/// countdown. At most one verify or resend call is in flight at a time;
/// `loading` is the mutual-exclusion flag and is checked at the very entry
/// of both operations.
pub struct OtpFlowController<A, S, N>
where
    A: AuthApiTrait,
    S: SessionStoreTrait,
    N: NotifierTrait,
{
    /// Auth backend gateway
    api: Arc<A>,
    /// Session/auth collaborator receiving the login side effect
    session_store: Arc<S>,
    /// Transient notification surface
    notifier: Arc<N>,
    /// Flow configuration
    config: OtpFlowConfig,
    /// Mutable per-visit state; never held across an await point
    session: Mutex<VerificationSession>,
    /// Handle of the running countdown task, if any
    countdown: Mutex<Option<JoinHandle<()>>>,
}

impl<A, S, N> OtpFlowController<A, S, N>
where
    A: AuthApiTrait + 'static,
    S: SessionStoreTrait + 'static,
    N: NotifierTrait + 'static,
{
    /// Creates a controller for a verification screen visit
    ///
    /// The cooldown starts at its configured value; call [`start`] to run
    /// the screen-entry sequence (countdown, mount delay, initial focus,
    /// prefill auto-submit).
    ///
    /// [`start`]: OtpFlowController::start
    pub fn new(
        api: Arc<A>,
        session_store: Arc<S>,
        notifier: Arc<N>,
        config: OtpFlowConfig,
        phone: impl Into<String>,
    ) -> Arc<Self> {
        let phone = phone.into();
        let session = VerificationSession::new(phone, config.resend_cooldown_seconds);
        Arc::new(Self {
            api,
            session_store,
            notifier,
            config,
            session: Mutex::new(session),
            countdown: Mutex::new(None),
        })
    }

    /// Runs the screen-entry sequence
    ///
    /// A prefilled OTP (e.g. carried over from the login screen) is parsed
    /// into the entry immediately. The countdown starts, then after the
    /// mount delay focus moves to the first empty slot (or slot 0), or a
    /// fully prefilled entry is submitted automatically. Prefill handling
    /// and initial focus are one sequence, so a complete prefill triggers
    /// exactly one verify call.
    pub async fn start(self: &Arc<Self>, prefilled_otp: Option<&str>) {
        let prefill_complete = {
            let mut session = self.session_state();
            if let Some(raw) = prefilled_otp {
                session.entry = OtpEntry::from_digits(raw);
            }
            session.entry.is_complete()
        };

        self.spawn_countdown();

        // Let the input surface mount before focusing or submitting
        tokio::time::sleep(Duration::from_millis(self.config.mount_focus_delay_ms)).await;

        if prefill_complete {
            let code = {
                let mut session = self.session_state();
                session.focused_slot = OTP_LENGTH - 1;
                session.entry.code()
            };
            tracing::info!(
                phone = %self.log_phone(),
                event = "otp_prefill_autoverify",
                "Submitting fully prefilled verification code"
            );
            self.verify(Some(&code)).await;
        } else {
            let mut session = self.session_state();
            session.focused_slot = session.entry.first_empty().unwrap_or(0);
        }
    }

    /// Handles raw input text for one entry slot
    ///
    /// Non-digit characters are stripped. More than one remaining digit is
    /// treated as a bulk paste: the first `OTP_LENGTH` digits land in a
    /// fresh entry starting at slot 0 regardless of `index`. A single (or
    /// empty) character is written into the slot, advancing focus. Either
    /// path submits automatically once the entry is complete. State
    /// mutation and focus movement happen under one lock acquisition, so no
    /// intermediate state is observable.
    pub async fn enter_digit(&self, text: &str, index: usize) {
        if index >= OTP_LENGTH {
            return;
        }
        let numeric: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

        let auto_submit = {
            let mut session = self.session_state();
            if session.phase == FlowPhase::Verified {
                return;
            }
            if numeric.chars().count() > 1 {
                Self::apply_paste(&mut session, &numeric)
            } else {
                Self::apply_single(&mut session, numeric.chars().next(), index)
            }
        };

        if let Some(code) = auto_submit {
            self.verify(Some(&code)).await;
        }
    }

    /// Handles backspace pressed in a slot
    ///
    /// When the slot is empty and not the first, the previous slot's
    /// content is cleared and focus moves there. Clearing (rather than just
    /// refocusing) is the shipped behavior of the entry surface.
    pub fn handle_backspace(&self, index: usize) {
        if index == 0 || index >= OTP_LENGTH {
            return;
        }
        let mut session = self.session_state();
        if session.entry.digit(index).is_none() {
            session.entry.set(index - 1, None);
            session.focused_slot = index - 1;
        }
    }

    /// Verifies the entered (or overridden) code against the backend
    ///
    /// No-op while a call is already in flight or after the flow reached
    /// `Verified`. A code shorter than the full OTP length short-circuits
    /// to an [`FlowError::IncompleteInput`] without touching the network.
    /// On success the session store receives the login hand-off exactly
    /// once; on any failure the entry is wiped, focus returns to slot 0,
    /// and a user-visible error is set. `loading` is false again on every
    /// path out of this method.
    pub async fn verify(&self, code_override: Option<&str>) {
        let (phone, code) = {
            let mut session = self.session_state();
            if session.loading || session.phase == FlowPhase::Verified {
                return;
            }
            let code = match code_override {
                Some(code) => code.to_string(),
                None => session.entry.code(),
            };
            if code.chars().count() != OTP_LENGTH {
                session.error = Some(FlowError::IncompleteInput);
                return;
            }
            session.loading = true;
            session.phase = FlowPhase::Submitting;
            session.error = None;
            (session.phone.clone(), code)
        };

        tracing::info!(
            phone = %mask_phone(&phone),
            event = "otp_verify_started",
            "Verifying OTP code"
        );

        match self.api.verify_code(&phone, &code).await {
            Ok(response) if response.success => {
                let user = SessionUser::verified(phone.as_str());
                match self.session_store.login(&response.token, &user).await {
                    Ok(()) => {
                        let mut session = self.session_state();
                        session.loading = false;
                        session.phase = FlowPhase::Verified;
                        tracing::info!(
                            phone = %mask_phone(&phone),
                            event = "otp_verified",
                            "OTP verified and session stored"
                        );
                    }
                    Err(message) => {
                        tracing::error!(
                            phone = %mask_phone(&phone),
                            error = %message,
                            event = "login_failed",
                            "Session store rejected login after successful verification"
                        );
                        self.fail_verification(FlowError::login_failed(message));
                    }
                }
            }
            Ok(response) => {
                tracing::warn!(
                    phone = %mask_phone(&phone),
                    event = "otp_rejected",
                    "Server rejected the OTP code"
                );
                self.fail_verification(FlowError::invalid_code(response.message));
            }
            Err(err) => {
                tracing::error!(
                    phone = %mask_phone(&phone),
                    error = %err,
                    event = "otp_verify_transport_error",
                    "Verify call failed before a server answer was obtained"
                );
                self.fail_verification(FlowError::verification_failed(&err));
            }
        }
    }

    /// Requests a new code be sent
    ///
    /// No-op unless the cooldown has elapsed and no call is in flight. On
    /// success the cooldown and countdown restart, the entry is wiped with
    /// focus back on slot 0, and a toast is emitted. On failure only the
    /// error is set; the timer and entry are left untouched (the resend did
    /// not consume the current attempt).
    pub async fn resend(self: &Arc<Self>) {
        let phone = {
            let mut session = self.session_state();
            if !session.can_resend || session.loading || session.phase == FlowPhase::Verified {
                return;
            }
            session.loading = true;
            session.phase = FlowPhase::Submitting;
            session.error = None;
            session.phone.clone()
        };

        tracing::info!(
            phone = %mask_phone(&phone),
            event = "otp_resend_started",
            "Requesting a new OTP code"
        );

        match self.api.send_code(&phone).await {
            Ok(response) if response.success => {
                {
                    let mut session = self.session_state();
                    session.loading = false;
                    session.phase = FlowPhase::Entering;
                    session.reset_cooldown(self.config.resend_cooldown_seconds);
                    session.reset_entry();
                }
                self.spawn_countdown();
                self.notifier.notify(Toast::success(
                    "OTP sent",
                    format!("A new code was sent to {}", mask_phone_display(&phone)),
                ));
                tracing::info!(
                    phone = %mask_phone(&phone),
                    event = "otp_resent",
                    "New OTP code sent"
                );
            }
            Ok(response) => {
                let mut session = self.session_state();
                session.loading = false;
                session.phase = FlowPhase::Entering;
                session.error = Some(FlowError::resend_failed(response.message));
            }
            Err(err) => {
                tracing::error!(
                    phone = %mask_phone(&phone),
                    error = %err,
                    event = "otp_resend_transport_error",
                    "Resend call failed"
                );
                let mut session = self.session_state();
                session.loading = false;
                session.phase = FlowPhase::Entering;
                session.error = Some(FlowError::resend_failed_from(&err));
            }
        }
    }

    /// Starts the countdown task, aborting any previous one first
    ///
    /// Exactly one countdown ticks at a time; restarting must cancel the
    /// previous task, not merely ignore it, so decrements never double up.
    pub fn spawn_countdown(self: &Arc<Self>) {
        let mut guard = self.countdown_handle();
        if let Some(previous) = guard.take() {
            previous.abort();
        }

        let weak: Weak<Self> = Arc::downgrade(self);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick completes immediately; consume it so the first
            // decrement lands a full second after the countdown starts.
            interval.tick().await;
            loop {
                interval.tick().await;
                let Some(controller) = weak.upgrade() else {
                    break;
                };
                let keep_ticking = controller.session_state().tick();
                if !keep_ticking {
                    break;
                }
            }
        });

        *guard = Some(handle);
    }

    /// Stops the countdown task, if one is running
    pub fn stop_countdown(&self) {
        if let Some(handle) = self.countdown_handle().take() {
            handle.abort();
        }
    }

    /// Read-only view of the flow state for UI binding
    pub fn snapshot(&self) -> FlowSnapshot {
        let session = self.session_state();
        FlowSnapshot {
            phase: session.phase,
            slots: session.entry.slots(),
            error: session.error.as_ref().map(|e| e.to_string()),
            loading: session.loading,
            resend_timer: session.resend_timer,
            can_resend: session.can_resend,
            focused_slot: session.focused_slot,
        }
    }

    /// The last flow error, if any
    pub fn last_error(&self) -> Option<FlowError> {
        self.session_state().error.clone()
    }

    /// Phone number masked for on-screen display
    pub fn masked_phone(&self) -> String {
        mask_phone_display(&self.session_state().phone)
    }

    /// Countdown label for the resend control, `m:ss`
    pub fn countdown_label(&self) -> String {
        format_countdown(self.session_state().resend_timer)
    }

    fn apply_paste(session: &mut VerificationSession, digits: &str) -> Option<String> {
        session.entry = OtpEntry::from_digits(digits);
        session.error = None;
        match session.entry.first_empty() {
            Some(slot) => {
                session.focused_slot = slot;
                None
            }
            None => {
                session.focused_slot = OTP_LENGTH - 1;
                Some(session.entry.code())
            }
        }
    }

    fn apply_single(
        session: &mut VerificationSession,
        digit: Option<char>,
        index: usize,
    ) -> Option<String> {
        session.entry.set(index, digit);
        session.error = None;
        if digit.is_some() && index < OTP_LENGTH - 1 {
            session.focused_slot = index + 1;
        }
        if index == OTP_LENGTH - 1 && digit.is_some() && session.entry.is_complete() {
            Some(session.entry.code())
        } else {
            None
        }
    }

    /// Records a failed verification: error shown, entry wiped, focus on slot 0
    fn fail_verification(&self, error: FlowError) {
        let mut session = self.session_state();
        session.loading = false;
        session.phase = FlowPhase::Entering;
        session.error = Some(error);
        session.reset_entry();
    }

    fn log_phone(&self) -> String {
        mask_phone(&self.session_state().phone)
    }

    fn session_state(&self) -> MutexGuard<'_, VerificationSession> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn countdown_handle(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.countdown.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<A, S, N> Drop for OtpFlowController<A, S, N>
where
    A: AuthApiTrait,
    S: SessionStoreTrait,
    N: NotifierTrait,
{
    fn drop(&mut self) {
        if let Some(handle) = self
            .countdown
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            handle.abort();
        }
    }
}
