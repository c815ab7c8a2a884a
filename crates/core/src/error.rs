//! Domain error model.

use thiserror::Error;

/// Result type used across the storefront domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local and recoverable by the user acting again; there is
/// no fatal class. `InvalidInput` messages are user-facing and rendered as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed, user-correctable input (e.g. a postal code with 7 digits).
    #[error("{0}")]
    InvalidInput(String),

    /// A collaborator (backend API) could not be reached or answered badly.
    #[error("network error: {0}")]
    Network(String),

    /// Credentials were rejected by the auth collaborator.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A requested resource was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Whether the user can fix this by changing what they typed.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Auth(_))
    }
}
