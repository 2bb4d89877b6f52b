//! # ReLoop Core
//!
//! Core domain and flow-control layer for the ReLoop client.
//! This crate contains the domain entities, the OTP verification flow
//! controller, the collaborator traits it drives, and error types.
//! Concrete I/O implementations live in `rl_infra`.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
