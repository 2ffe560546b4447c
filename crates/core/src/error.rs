//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// existence checks). Transport concerns belong in the API crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item with the requested identifier is already stored.
    #[error("item already exists")]
    AlreadyExists,

    /// No item is stored under the requested identifier.
    #[error("item not found")]
    NotFound,

    /// A value failed validation (malformed or incomplete item fields).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn already_exists() -> Self {
        Self::AlreadyExists
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        assert_eq!(
            DomainError::validation("price must be a number").to_string(),
            "validation failed: price must be a number"
        );
        assert_eq!(DomainError::not_found().to_string(), "item not found");
        assert_eq!(DomainError::already_exists().to_string(), "item already exists");
    }
}
