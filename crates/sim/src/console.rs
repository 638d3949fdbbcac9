//! Console front for a [`Library`]: every operation prints a status line and
//! answers with a plain success flag.

use std::io::{self, Write};

use libris_catalog::Library;
use libris_core::{BookId, DomainError};

/// Drives a library and writes human-readable status lines to `out`.
#[derive(Debug)]
pub struct Console<W> {
    library: Library,
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(library: Library, out: W) -> Self {
        Self { library, out }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn into_inner(self) -> (Library, W) {
        (self.library, self.out)
    }

    pub fn register_book(&mut self, title: &str, author: &str) -> io::Result<bool> {
        match self.library.register_book(title, author) {
            Ok(id) => {
                let line = match self.library.book(id) {
                    Some(book) => format!("Libro registrado exitosamente: {book}"),
                    None => format!("Libro registrado exitosamente con ID {id}."),
                };
                writeln!(self.out, "{line}")?;
                Ok(true)
            }
            Err(err) => self.report_error(&err, title, None),
        }
    }

    pub fn lend_book(&mut self, book_id: BookId, borrower: &str) -> io::Result<bool> {
        match self.library.lend_book(book_id, borrower) {
            Ok(()) => {
                let title = self.title_of(book_id);
                writeln!(
                    self.out,
                    "Libro '{title}' prestado exitosamente a {}.",
                    borrower.trim()
                )?;
                Ok(true)
            }
            Err(err) => {
                let title = self.title_of(book_id);
                self.report_error(&err, &title, Some(book_id))
            }
        }
    }

    pub fn return_book(&mut self, book_id: BookId) -> io::Result<bool> {
        match self.library.return_book(book_id) {
            Ok(()) => {
                let title = self.title_of(book_id);
                writeln!(self.out, "Libro '{title}' devuelto exitosamente.")?;
                Ok(true)
            }
            Err(err) => {
                let title = self.title_of(book_id);
                self.report_error(&err, &title, Some(book_id))
            }
        }
    }

    pub fn show_available_books(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "{}", self.library.available_report())
    }

    pub fn show_active_loans(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        write!(self.out, "{}", self.library.loans_report())
    }

    fn title_of(&self, book_id: BookId) -> String {
        self.library
            .book(book_id)
            .map(|b| b.title().to_string())
            .unwrap_or_default()
    }

    fn report_error(
        &mut self,
        err: &DomainError,
        title: &str,
        book_id: Option<BookId>,
    ) -> io::Result<bool> {
        let message = match err {
            DomainError::DuplicateTitle(_) => {
                format!("El libro '{}' ya está registrado en la biblioteca.", title.trim())
            }
            DomainError::NotFound(id) => format!("No se encontró el libro con ID {id}."),
            DomainError::InvalidState(detail) => {
                match book_id.and_then(|id| self.library.book(id)) {
                    Some(b) if b.is_available() => format!("El libro '{title}' no está prestado."),
                    Some(_) => format!("El libro '{title}' no está disponible."),
                    None => detail.clone(),
                }
            }
            DomainError::InvalidArgument(detail) => format!("Dato inválido: {detail}."),
        };
        writeln!(self.out, "Error: {message}")?;
        Ok(false)
    }
}
