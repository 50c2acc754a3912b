//! Error types for OpenGRC

use thiserror::Error;

/// OpenGRC error type
#[derive(Error, Debug)]
pub enum GrcError {
    /// Remediation item not found
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Treatment plan not found
    #[error("plan not found: {0}")]
    PlanNotFound(String),

    /// Unknown framework identifier
    #[error("unknown framework: {0}")]
    UnknownFramework(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid status transition
    #[error("invalid status transition: {0}")]
    InvalidTransition(String),

    /// Audit trail error
    #[error("audit error: {0}")]
    Audit(String),
}

/// Result type for OpenGRC
pub type GrcResult<T> = Result<T, GrcError>;
