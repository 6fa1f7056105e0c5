//! Shared error model.

use thiserror::Error;

/// Result type used across the workspace for configuration and model checks.
pub type DomainResult<T> = Result<T, DomainError>;

/// Deterministic validation failure.
///
/// Keep this to model problems (bad configuration, broken invariants of a
/// table). Authentication and formatting failures have their own error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty role name, relative path).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An invariant across several values was violated (e.g. duplicate route).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = DomainError::validation("login path must start with '/'");
        assert_eq!(
            err.to_string(),
            "validation failed: login path must start with '/'"
        );
        assert_eq!(
            DomainError::invariant("route '/finance' is configured twice").to_string(),
            "invariant violated: route '/finance' is configured twice"
        );
    }
}
