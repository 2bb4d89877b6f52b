//! Configuration module for the ReLoop client
//!
//! Configuration is organized by concern:
//! - `api` - Auth backend endpoints and request timeouts

pub mod api;

pub use api::ApiConfig;
