//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a book within one library.
///
/// Identifiers start at 1 and are handed out by an [`IdSequence`]; they are
/// never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u32);

impl BookId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for BookId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for BookId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<BookId> for u32 {
    fn from(value: BookId) -> Self {
        value.0
    }
}

impl FromStr for BookId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_argument(format!("BookId: {e}")))?;
        Ok(Self(value))
    }
}

/// Monotonic identifier source owned by a single aggregate.
///
/// Each owner starts its own sequence at 1, so independent instances never
/// share counter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// The identifier the next call to [`IdSequence::advance`] will return.
    pub fn peek(&self) -> BookId {
        BookId(self.next)
    }

    /// Hand out the next identifier.
    pub fn advance(&mut self) -> BookId {
        let id = BookId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// Move the sequence past `id` if it has not already got there.
    ///
    /// Used when replaying events that carry identifiers chosen earlier.
    pub fn observe(&mut self, id: BookId) {
        if id.0 >= self.next {
            self.next = id.0.saturating_add(1);
        }
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
