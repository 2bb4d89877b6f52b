//! In-memory session store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;

use rl_core::domain::entities::user::SessionUser;
use rl_core::services::otp_flow::SessionStoreTrait;
use rl_shared::utils::phone::mask_phone;

/// A stored login session
#[derive(Debug, Clone)]
pub struct StoredSession {
    /// Token issued by the backend
    pub token: String,
    /// The logged-in user
    pub user: SessionUser,
    /// When the login happened
    pub logged_in_at: DateTime<Utc>,
}

/// In-process session store
///
/// Stand-in for the platform key-value store the app shell wraps. Holds at
/// most one session for the lifetime of the process; a new login replaces
/// the previous session.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<StoredSession>>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session, if logged in
    pub async fn current(&self) -> Option<StoredSession> {
        self.session.read().await.clone()
    }

    /// Whether a session is present
    pub async fn is_logged_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Clears the current session
    pub async fn logout(&self) {
        *self.session.write().await = None;
        info!(event = "logout", "Session cleared");
    }
}

#[async_trait]
impl SessionStoreTrait for MemorySessionStore {
    async fn login(&self, token: &str, user: &SessionUser) -> Result<(), String> {
        *self.session.write().await = Some(StoredSession {
            token: token.to_string(),
            user: user.clone(),
            logged_in_at: Utc::now(),
        });
        info!(
            phone = %mask_phone(&user.phone),
            event = "login",
            "Session stored"
        );
        Ok(())
    }
}
