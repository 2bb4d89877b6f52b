//! Error types for the verification flow.

mod types;

pub use types::{FlowError, GatewayError};

/// Result alias for flow-level operations
pub type FlowResult<T> = Result<T, FlowError>;
