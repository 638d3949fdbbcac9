//! Domain error model.

use thiserror::Error;

use crate::id::BookId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant describes a rejected operation; the rejecting aggregate's
/// state is left untouched whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Registration rejected: a book with the same title (ignoring case) exists.
    #[error("a book titled '{0}' is already registered")]
    DuplicateTitle(String),

    /// No book with the given identifier exists.
    #[error("no book found with id {0}")]
    NotFound(BookId),

    /// The operation is not allowed in the book's current state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A required value was missing or blank.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    pub fn duplicate_title(title: impl Into<String>) -> Self {
        Self::DuplicateTitle(title.into())
    }

    pub fn not_found(id: BookId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            DomainError::duplicate_title("Dune").to_string(),
            "a book titled 'Dune' is already registered"
        );
        assert_eq!(
            DomainError::not_found(BookId::new(7)).to_string(),
            "no book found with id 7"
        );
        assert_eq!(
            DomainError::invalid_argument("borrower cannot be empty").to_string(),
            "invalid argument: borrower cannot be empty"
        );
    }
}
