//! Mock implementations for testing the OTP flow controller

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::user::SessionUser;
use crate::errors::GatewayError;
use crate::services::otp_flow::traits::{AuthApiTrait, NotifierTrait, SessionStoreTrait};
use crate::services::otp_flow::types::{SendCodeResponse, Toast, VerifyCodeResponse};

/// Programmable outcome for a mock gateway call
#[derive(Clone)]
pub enum MockOutcome {
    /// Server accepts the request
    Accept,
    /// Server answers with success = false and an optional message
    Reject(Option<String>),
    /// Transport-level failure
    Fail(GatewayError),
}

// Mock auth gateway for testing
pub struct MockAuthApi {
    pub verify_outcome: Mutex<MockOutcome>,
    pub send_outcome: Mutex<MockOutcome>,
    pub verify_calls: Arc<Mutex<Vec<(String, String)>>>,
    pub send_calls: Arc<Mutex<Vec<String>>>,
    pub delay: Option<Duration>,
}

impl MockAuthApi {
    pub fn accepting() -> Self {
        Self::with_outcome(MockOutcome::Accept)
    }

    pub fn rejecting(message: Option<&str>) -> Self {
        Self::with_outcome(MockOutcome::Reject(message.map(str::to_string)))
    }

    pub fn failing(err: GatewayError) -> Self {
        Self::with_outcome(MockOutcome::Fail(err))
    }

    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            verify_outcome: Mutex::new(outcome.clone()),
            send_outcome: Mutex::new(outcome),
            verify_calls: Arc::new(Mutex::new(Vec::new())),
            send_calls: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Delays every call, so in-flight overlap can be arranged with a paused clock
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_verify_outcome(&self, outcome: MockOutcome) {
        *self.verify_outcome.lock().unwrap() = outcome;
    }

    pub fn set_send_outcome(&self, outcome: MockOutcome) {
        *self.send_outcome.lock().unwrap() = outcome;
    }

    pub fn verify_calls(&self) -> Vec<(String, String)> {
        self.verify_calls.lock().unwrap().clone()
    }

    pub fn send_calls(&self) -> Vec<String> {
        self.send_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthApiTrait for MockAuthApi {
    async fn verify_code(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<VerifyCodeResponse, GatewayError> {
        self.verify_calls
            .lock()
            .unwrap()
            .push((phone.to_string(), code.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.verify_outcome.lock().unwrap().clone() {
            MockOutcome::Accept => Ok(VerifyCodeResponse {
                success: true,
                message: None,
                token: "mock-token".to_string(),
            }),
            MockOutcome::Reject(message) => Ok(VerifyCodeResponse {
                success: false,
                message,
                token: String::new(),
            }),
            MockOutcome::Fail(err) => Err(err),
        }
    }

    async fn send_code(&self, phone: &str) -> Result<SendCodeResponse, GatewayError> {
        self.send_calls.lock().unwrap().push(phone.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.send_outcome.lock().unwrap().clone() {
            MockOutcome::Accept => Ok(SendCodeResponse {
                success: true,
                message: None,
            }),
            MockOutcome::Reject(message) => Ok(SendCodeResponse {
                success: false,
                message,
            }),
            MockOutcome::Fail(err) => Err(err),
        }
    }
}

// Mock session store for testing
pub struct MockSessionStore {
    pub logins: Arc<Mutex<Vec<(String, SessionUser)>>>,
    pub should_fail: bool,
}

impl MockSessionStore {
    pub fn new(should_fail: bool) -> Self {
        Self {
            logins: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    pub fn login_count(&self) -> usize {
        self.logins.lock().unwrap().len()
    }

    pub fn last_login(&self) -> Option<(String, SessionUser)> {
        self.logins.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SessionStoreTrait for MockSessionStore {
    async fn login(&self, token: &str, user: &SessionUser) -> Result<(), String> {
        if self.should_fail {
            return Err("Session storage unavailable".to_string());
        }
        self.logins
            .lock()
            .unwrap()
            .push((token.to_string(), user.clone()));
        Ok(())
    }
}

// Mock notifier for testing
pub struct MockNotifier {
    pub toasts: Mutex<Vec<Toast>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            toasts: Mutex::new(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl NotifierTrait for MockNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
