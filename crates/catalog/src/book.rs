use serde::{Deserialize, Serialize};

use libris_core::{BookId, DomainResult, Entity, NonEmptyText};

/// Loan status of a single book.
///
/// A borrower exists exactly when the book is loaned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BookStatus {
    #[default]
    Available,
    Loaned { borrower: NonEmptyText },
}

/// Entity: Book.
///
/// Bibliographic fields are fixed at creation. Loan status only changes through
/// [`Book::lend`] and [`Book::return_book`], which are visible to the owning
/// `Library` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: NonEmptyText,
    author: NonEmptyText,
    status: BookStatus,
}

impl Book {
    pub(crate) fn new(id: BookId, title: NonEmptyText, author: NonEmptyText) -> Self {
        Self {
            id,
            title,
            author,
            status: BookStatus::Available,
        }
    }

    pub fn id_typed(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn status(&self) -> &BookStatus {
        &self.status
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, BookStatus::Available)
    }

    pub fn current_borrower(&self) -> Option<&str> {
        match &self.status {
            BookStatus::Available => None,
            BookStatus::Loaned { borrower } => Some(borrower.as_str()),
        }
    }

    /// Case-insensitive title comparison.
    pub fn has_same_title(&self, candidate: &str) -> bool {
        self.title.eq_ignore_case(candidate)
    }

    /// Mark the book as loaned to `borrower`.
    ///
    /// Prior availability is not checked here; the library does that before
    /// calling in.
    pub(crate) fn lend(&mut self, borrower: &str) -> DomainResult<()> {
        let borrower = NonEmptyText::parse("borrower", borrower)?;
        self.status = BookStatus::Loaned { borrower };
        Ok(())
    }

    pub(crate) fn return_book(&mut self) {
        self.status = BookStatus::Available;
    }
}

impl Entity for Book {
    type Id = BookId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Book {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {} - {} ", self.id, self.title, self.author)?;
        match &self.status {
            BookStatus::Available => f.write_str("(Disponible)"),
            BookStatus::Loaned { borrower } => write!(f, "(Prestado a {borrower})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libris_core::DomainError;

    fn book(id: u32, title: &str, author: &str) -> Book {
        Book::new(
            BookId::new(id),
            NonEmptyText::parse("title", title).unwrap(),
            NonEmptyText::parse("author", author).unwrap(),
        )
    }

    #[test]
    fn new_book_is_available_without_borrower() {
        let b = book(1, "Don Quijote", "Cervantes");
        assert!(b.is_available());
        assert_eq!(b.current_borrower(), None);
        assert_eq!(b.status(), &BookStatus::Available);
    }

    #[test]
    fn lend_sets_borrower_and_clears_availability() {
        let mut b = book(1, "Don Quijote", "Cervantes");
        b.lend("Ana").unwrap();
        assert!(!b.is_available());
        assert_eq!(b.current_borrower(), Some("Ana"));
    }

    #[test]
    fn lend_rejects_blank_borrower_without_changing_state() {
        let mut b = book(1, "Don Quijote", "Cervantes");
        let err = b.lend("  ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert!(b.is_available());
        assert_eq!(b.current_borrower(), None);
    }

    #[test]
    fn return_book_is_unconditional() {
        let mut b = book(1, "Dune", "Herbert");
        b.return_book();
        assert!(b.is_available());

        b.lend("Luis").unwrap();
        b.return_book();
        assert!(b.is_available());
        assert_eq!(b.current_borrower(), None);
    }

    #[test]
    fn title_comparison_ignores_case() {
        let b = book(1, "Dune", "Herbert");
        assert!(b.has_same_title("dune"));
        assert!(b.has_same_title("DUNE"));
        assert!(!b.has_same_title("Dune Messiah"));
    }

    #[test]
    fn display_shows_status() {
        let mut b = book(3, "Rayuela", "Cortázar");
        assert_eq!(b.to_string(), "[3] Rayuela - Cortázar (Disponible)");
        b.lend("Marta").unwrap();
        assert_eq!(b.to_string(), "[3] Rayuela - Cortázar (Prestado a Marta)");
    }

    #[test]
    fn identity_ignores_loan_state() {
        let a = book(4, "Ficciones", "Borges");
        let mut b = a.clone();
        b.lend("Pablo").unwrap();
        assert!(a.same_identity_as(&b));
        assert_ne!(a, b);
    }
}
