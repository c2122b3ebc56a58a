//! Error taxonomy shared by every module.
//!
//! All failures are fail-fast: an operation that returns `Err` has not
//! partially applied its change, and callers are expected to propagate.

use thiserror::Error;

/// Errors raised by cards, stacks, shufflers and rules graphs.
///
/// Each variant carries a message naming the operation that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    /// An internal invariant was broken (construction or lifecycle bug).
    #[error("internal error: {0}")]
    Internal(String),

    /// A required reference, card or transition does not exist.
    #[error("{0} - does not exist")]
    NotExistent(String),

    /// A catalog lookup matched no archetype.
    #[error("{0} - not found")]
    NotFound(String),

    /// A precondition or capacity limit was violated.
    #[error("{0} - not possible")]
    NotPossible(String),

    /// A value failed domain validation.
    #[error("{0} - not valid")]
    NotValid(String),
}

impl CardError {
    pub(crate) fn not_existent(msg: impl Into<String>) -> Self {
        Self::NotExistent(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn not_possible(msg: impl Into<String>) -> Self {
        Self::NotPossible(msg.into())
    }

    pub(crate) fn not_valid(msg: impl Into<String>) -> Self {
        Self::NotValid(msg.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_kind() {
        let err = CardError::not_existent("Stack.push - given card");
        assert_eq!(err.to_string(), "Stack.push - given card - does not exist");

        let err = CardError::not_found("Catalog.build - id XX");
        assert!(err.to_string().ends_with("not found"));

        let err = CardError::not_possible("Stack.pop - empty");
        assert!(err.to_string().ends_with("not possible"));

        let err = CardError::not_valid("Stack.new - capacity 0");
        assert!(err.to_string().ends_with("not valid"));
    }

    #[test]
    fn test_internal_prefix() {
        let err = CardError::Internal("backing storage missing".into());
        assert_eq!(err.to_string(), "internal error: backing storage missing");
    }
}
