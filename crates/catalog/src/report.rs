//! Read-only views over a library, rendered the way the console shows them.

use serde::Serialize;

use libris_core::BookId;

use crate::book::Book;

/// One open loan as shown in the loans report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveLoan<'a> {
    pub book_id: BookId,
    pub title: &'a str,
    pub borrower: &'a str,
}

impl core::fmt::Display for ActiveLoan<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - Prestado a: {}", self.title, self.borrower)
    }
}

/// Books currently on the shelf.
#[derive(Debug, Clone, Serialize)]
pub struct AvailableBooksReport<'a> {
    books: Vec<&'a Book>,
}

impl<'a> AvailableBooksReport<'a> {
    pub const HEADER: &'static str = "=== LIBROS DISPONIBLES ===";
    pub const EMPTY: &'static str = "No hay libros disponibles.";

    pub fn new(books: Vec<&'a Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[&'a Book] {
        &self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl core::fmt::Display for AvailableBooksReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", Self::HEADER)?;
        if self.books.is_empty() {
            return writeln!(f, "{}", Self::EMPTY);
        }
        for book in &self.books {
            writeln!(f, "{book}")?;
        }
        Ok(())
    }
}

/// Who has what.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveLoansReport<'a> {
    loans: Vec<ActiveLoan<'a>>,
}

impl<'a> ActiveLoansReport<'a> {
    pub const HEADER: &'static str = "=== PRÉSTAMOS ACTIVOS ===";
    pub const EMPTY: &'static str = "No hay préstamos activos.";

    pub fn new(loans: Vec<ActiveLoan<'a>>) -> Self {
        Self { loans }
    }

    pub fn loans(&self) -> &[ActiveLoan<'a>] {
        &self.loans
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}

impl core::fmt::Display for ActiveLoansReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{}", Self::HEADER)?;
        if self.loans.is_empty() {
            return writeln!(f, "{}", Self::EMPTY);
        }
        for loan in &self.loans {
            writeln!(f, "{loan}")?;
        }
        Ok(())
    }
}
