//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attributes. To "modify"
/// one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Text that is guaranteed to contain something other than whitespace.
///
/// The original spelling is kept as given (surrounding whitespace trimmed);
/// comparisons that should ignore case go through [`NonEmptyText::eq_ignore_case`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Validate `raw`, naming `field` in the error when it is blank.
    pub fn parse(field: &str, raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_argument(format!(
                "{field} cannot be empty"
            )));
        }
        if trimmed.len() == raw.len() {
            Ok(Self(raw))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive equality with arbitrary text.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        let other = other.trim();
        if self.0.eq_ignore_ascii_case(other) {
            return true;
        }
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl ValueObject for NonEmptyText {}

impl core::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse("text", value)
    }
}

impl From<NonEmptyText> for String {
    fn from(value: NonEmptyText) -> Self {
        value.0
    }
}
