//! Session user record synthesized on successful verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user in the ReLoop app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A regular user scheduling pick-ups
    User,
    /// An operator managing recycling centers
    Admin,
}

/// User record handed to the session store after a successful verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Verified phone number
    pub phone: String,

    /// Display name, if the profile has one
    pub display_name: Option<String>,

    /// Role of the user
    pub role: UserRole,

    /// Whether the phone number has been verified
    pub verified: bool,

    /// Timestamp when this record was created
    pub created_at: DateTime<Utc>,
}

impl SessionUser {
    /// Creates a verified user record for a phone number
    pub fn verified(phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone: phone.into(),
            display_name: None,
            role: UserRole::User,
            verified: true,
            created_at: Utc::now(),
        }
    }
}
