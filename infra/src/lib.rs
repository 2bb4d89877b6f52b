//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits the ReLoop flow
//! controller drives:
//! - **http**: reqwest-backed auth backend gateway
//! - **session**: in-memory session store holding the logged-in user
//! - **notify**: buffered toast sink the UI layer drains

pub mod http;
pub mod notify;
pub mod session;

pub use http::HttpAuthApi;
pub use notify::BufferedNotifier;
pub use session::MemorySessionStore;
