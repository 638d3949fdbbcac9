//! Loan ledger: which book is with whom.

use serde::Serialize;

use libris_core::{BookId, NonEmptyText};

/// One open loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanEntry {
    pub book_id: BookId,
    pub borrower: NonEmptyText,
}

/// Open loans in the order they were opened.
///
/// Holds at most one entry per book. Lookups are linear; a library this size
/// never needs more.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanLedger {
    entries: Vec<LoanEntry>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn borrower_of(&self, book_id: BookId) -> Option<&NonEmptyText> {
        self.entries
            .iter()
            .find(|e| e.book_id == book_id)
            .map(|e| &e.borrower)
    }

    pub fn contains(&self, book_id: BookId) -> bool {
        self.borrower_of(book_id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoanEntry> {
        self.entries.iter()
    }

    /// Record a loan. An existing entry for the same book is replaced in place.
    pub(crate) fn record(&mut self, book_id: BookId, borrower: NonEmptyText) {
        match self.entries.iter_mut().find(|e| e.book_id == book_id) {
            Some(entry) => entry.borrower = borrower,
            None => self.entries.push(LoanEntry { book_id, borrower }),
        }
    }

    /// Close a loan, returning the borrower it was recorded for.
    pub(crate) fn close(&mut self, book_id: BookId) -> Option<NonEmptyText> {
        let pos = self.entries.iter().position(|e| e.book_id == book_id)?;
        Some(self.entries.remove(pos).borrower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> NonEmptyText {
        NonEmptyText::parse("borrower", s).unwrap()
    }

    #[test]
    fn iteration_follows_opening_order() {
        let mut ledger = LoanLedger::new();
        ledger.record(BookId::new(3), name("Ana"));
        ledger.record(BookId::new(1), name("Luis"));
        ledger.record(BookId::new(2), name("Eva"));

        let ids: Vec<u32> = ledger.iter().map(|e| e.book_id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn close_removes_only_the_given_book() {
        let mut ledger = LoanLedger::new();
        ledger.record(BookId::new(1), name("Ana"));
        ledger.record(BookId::new(2), name("Luis"));

        assert_eq!(ledger.close(BookId::new(1)), Some(name("Ana")));
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.contains(BookId::new(1)));
        assert_eq!(ledger.borrower_of(BookId::new(2)), Some(&name("Luis")));
        assert_eq!(ledger.close(BookId::new(1)), None);
    }

    #[test]
    fn reopening_after_close_goes_to_the_end() {
        let mut ledger = LoanLedger::new();
        ledger.record(BookId::new(1), name("Ana"));
        ledger.record(BookId::new(2), name("Luis"));
        ledger.close(BookId::new(1));
        ledger.record(BookId::new(1), name("Eva"));

        let ids: Vec<u32> = ledger.iter().map(|e| e.book_id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
