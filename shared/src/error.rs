//! Unified error type for the portal core
//!
//! Three-way taxonomy shared by the session guard and the report wizard:
//! - [`PortalError::Validation`]: bad local input, resolved synchronously
//! - [`PortalError::State`]: operation invoked in a state that disallows it
//! - [`PortalError::Collaborator`]: an injected async dependency failed
//!
//! A fourth variant, [`PortalError::Storage`], covers the credential slot
//! boundary (io/serde failures while reading or writing the token file).
//!
//! No variant is fatal: callers convert errors into a displayed message and
//! the guard/wizard remain in a well-defined, still-usable state.

use thiserror::Error;

/// Portal error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PortalError {
    /// Local input failed a precondition check
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation not allowed in the current state
    #[error("Invalid state: {0}")]
    State(String),

    /// An injected collaborator failed or rejected
    #[error("{0}")]
    Collaborator(String),

    /// Credential storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PortalError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a State error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State(message.into())
    }

    /// Create a Collaborator error
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator(message.into())
    }

    /// Create a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Get the human-readable message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::State(m) | Self::Collaborator(m) | Self::Storage(m) => m,
        }
    }

    /// Whether this error was produced without any collaborator call
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::State(_))
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type for portal operations
pub type PortalResult<T> = Result<T, PortalError>;
