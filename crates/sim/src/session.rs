//! The scripted lending session the binary plays.

use std::io::{self, Write};

use libris_catalog::Library;
use libris_core::BookId;

use crate::console::Console;

/// Outcome counts for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl SessionSummary {
    fn record(&mut self, ok: bool) {
        if ok {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Play the demo: register a few books, lend, return, and hit every
/// rejection path once. Status lines go to `out`.
pub fn run<W: Write>(out: W) -> io::Result<(Library, SessionSummary)> {
    let mut console = Console::new(Library::new(), out);
    let mut summary = SessionSummary::default();

    for (title, author) in [
        ("Don Quijote de la Mancha", "Miguel de Cervantes"),
        ("Cien Años de Soledad", "Gabriel García Márquez"),
        ("El Principito", "Antoine de Saint-Exupéry"),
        ("cien años de soledad", "Otro Autor"),
    ] {
        summary.record(console.register_book(title, author)?);
    }

    console.show_available_books()?;

    summary.record(console.lend_book(BookId::new(1), "Juan Pérez")?);
    summary.record(console.lend_book(BookId::new(2), "María García")?);
    summary.record(console.lend_book(BookId::new(1), "Carlos López")?);
    summary.record(console.lend_book(BookId::new(99), "Ana Torres")?);

    console.show_available_books()?;
    console.show_active_loans()?;

    summary.record(console.return_book(BookId::new(1))?);
    summary.record(console.return_book(BookId::new(3))?);

    console.show_available_books()?;
    console.show_active_loans()?;

    let (library, _) = console.into_inner();
    Ok((library, summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_session_ends_with_one_open_loan() {
        let (library, summary) = run(Vec::new()).unwrap();

        assert_eq!(library.len(), 3);
        assert_eq!(summary, SessionSummary { succeeded: 6, failed: 4 });

        let loans = library.list_active_loans();
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].title, "Cien Años de Soledad");
        assert_eq!(loans[0].borrower, "María García");
    }

    #[test]
    fn demo_session_prints_reports() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("=== LIBROS DISPONIBLES ===").count(), 3);
        assert_eq!(text.matches("=== PRÉSTAMOS ACTIVOS ===").count(), 2);
        assert!(text.contains("Error: No se encontró el libro con ID 99."));
        assert!(text.ends_with("Cien Años de Soledad - Prestado a: María García\n"));
    }
}
