//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are recoverable, non-fatal failures: the operation that produced one
/// has left the inventory untouched. Infrastructure failures (file IO, corrupt
/// snapshots) are modelled separately and are never folded into this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an empty item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced item is not stocked.
    #[error("item '{0}' not found in stock")]
    NotFound(String),

    /// A quantity was outside the accepted range for the operation.
    #[error("quantity must be a non-negative integer (got {0})")]
    InvalidQuantity(i64),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn invalid_quantity(qty: i64) -> Self {
        Self::InvalidQuantity(qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            DomainError::not_found("orange").to_string(),
            "item 'orange' not found in stock"
        );
        assert_eq!(
            DomainError::invalid_quantity(-4).to_string(),
            "quantity must be a non-negative integer (got -4)"
        );
    }
}
