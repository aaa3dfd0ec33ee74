//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every anticipated failure of the catalog core is one of these variants.
/// None of them is fatal; callers are expected to check and report them.
/// An empty catalog is *not* an error (see `Stats::Empty` in the catalog crate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a negative or non-finite price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A type/kind selector did not name any known variant.
    #[error("unrecognized {kind}: {value:?}")]
    UnknownSelector { kind: &'static str, value: String },

    /// A required selector was never set (e.g. building without a product type).
    #[error("{0} not set")]
    MissingSelector(&'static str),

    /// A catalog position outside `[0, len)`.
    #[error("no product at index {index} (catalog holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_selector(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownSelector {
            kind,
            value: value.into(),
        }
    }

    pub fn missing_selector(kind: &'static str) -> Self {
        Self::MissingSelector(kind)
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// `true` for the "not found" family of outcomes (bad catalog position).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = DomainError::unknown_selector("decorator", "gift-wrap");
        assert_eq!(err.to_string(), "unrecognized decorator: \"gift-wrap\"");

        let err = DomainError::index_out_of_range(7, 3);
        assert_eq!(err.to_string(), "no product at index 7 (catalog holds 3)");
        assert!(err.is_not_found());

        assert_eq!(
            DomainError::missing_selector("product type").to_string(),
            "product type not set"
        );
    }
}
