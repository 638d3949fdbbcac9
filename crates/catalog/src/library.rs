use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use libris_core::{
    Aggregate, AggregateRoot, BookId, DomainError, DomainResult, IdSequence, NonEmptyText,
};
use libris_events::{Command, Event, execute};

use crate::book::Book;
use crate::ledger::LoanLedger;
use crate::report::{ActiveLoan, ActiveLoansReport, AvailableBooksReport};

const DEFAULT_LIBRARY_NAME: &str = "biblioteca";

/// Command: RegisterBook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterBook {
    pub title: String,
    pub author: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: LendBook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendBook {
    pub book_id: BookId,
    pub borrower: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ReturnBook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub book_id: BookId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryCommand {
    RegisterBook(RegisterBook),
    LendBook(LendBook),
    ReturnBook(ReturnBook),
}

impl Command for LibraryCommand {
    fn command_type(&self) -> &'static str {
        match self {
            LibraryCommand::RegisterBook(_) => "library.register_book",
            LibraryCommand::LendBook(_) => "library.lend_book",
            LibraryCommand::ReturnBook(_) => "library.return_book",
        }
    }
}

/// Event: BookRegistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRegistered {
    pub book_id: BookId,
    pub title: NonEmptyText,
    pub author: NonEmptyText,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BookLent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLent {
    pub book_id: BookId,
    pub borrower: NonEmptyText,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BookReturned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub book_id: BookId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryEvent {
    BookRegistered(BookRegistered),
    BookLent(BookLent),
    BookReturned(BookReturned),
}

impl Event for LibraryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            LibraryEvent::BookRegistered(_) => "library.book.registered",
            LibraryEvent::BookLent(_) => "library.book.lent",
            LibraryEvent::BookReturned(_) => "library.book.returned",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            LibraryEvent::BookRegistered(e) => e.occurred_at,
            LibraryEvent::BookLent(e) => e.occurred_at,
            LibraryEvent::BookReturned(e) => e.occurred_at,
        }
    }
}

/// Aggregate root: Library.
///
/// Owns every [`Book`] and the loan ledger. Books are only ever handed out as
/// shared references, so the ledger and the books' own loan status cannot
/// drift apart from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    name: String,
    books: Vec<Book>,
    loans: LoanLedger,
    ids: IdSequence,
    version: u64,
}

impl Library {
    pub fn new() -> Self {
        Self::named(DEFAULT_LIBRARY_NAME)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            books: Vec::new(),
            loans: LoanLedger::new(),
            ids: IdSequence::new(),
            version: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All books in registration order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id_typed() == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Borrower recorded in the ledger for `id`, if the book is out.
    pub fn loan_of(&self, id: BookId) -> Option<&str> {
        self.loans.borrower_of(id).map(NonEmptyText::as_str)
    }

    pub fn ledger(&self) -> &LoanLedger {
        &self.loans
    }

    /// Register a new book and return its identifier.
    pub fn register_book(&mut self, title: &str, author: &str) -> DomainResult<BookId> {
        let cmd = LibraryCommand::RegisterBook(RegisterBook {
            title: title.to_string(),
            author: author.to_string(),
            occurred_at: Utc::now(),
        });
        let events = self.run(&cmd)?;
        match events.first() {
            Some(LibraryEvent::BookRegistered(e)) => Ok(e.book_id),
            _ => Err(DomainError::invalid_state("registration produced no book")),
        }
    }

    /// Lend an available book to `borrower`.
    pub fn lend_book(&mut self, book_id: BookId, borrower: &str) -> DomainResult<()> {
        let cmd = LibraryCommand::LendBook(LendBook {
            book_id,
            borrower: borrower.to_string(),
            occurred_at: Utc::now(),
        });
        self.run(&cmd).map(|_| ())
    }

    /// Take back a loaned book.
    pub fn return_book(&mut self, book_id: BookId) -> DomainResult<()> {
        let cmd = LibraryCommand::ReturnBook(ReturnBook {
            book_id,
            occurred_at: Utc::now(),
        });
        self.run(&cmd).map(|_| ())
    }

    /// Books that can currently be lent, in registration order.
    pub fn list_available_books(&self) -> Vec<&Book> {
        self.books.iter().filter(|b| b.is_available()).collect()
    }

    /// `(title, borrower)` for every open loan, oldest loan first.
    pub fn list_active_loans(&self) -> Vec<ActiveLoan<'_>> {
        self.loans
            .iter()
            .filter_map(|entry| {
                self.book(entry.book_id).map(|book| ActiveLoan {
                    book_id: entry.book_id,
                    title: book.title(),
                    borrower: entry.borrower.as_str(),
                })
            })
            .collect()
    }

    pub fn available_report(&self) -> AvailableBooksReport<'_> {
        AvailableBooksReport::new(self.list_available_books())
    }

    pub fn loans_report(&self) -> ActiveLoansReport<'_> {
        ActiveLoansReport::new(self.list_active_loans())
    }

    fn run(&mut self, cmd: &LibraryCommand) -> DomainResult<Vec<LibraryEvent>> {
        match execute(self, cmd) {
            Ok(events) => {
                for ev in &events {
                    self.log_accepted(ev);
                }
                Ok(events)
            }
            Err(err) => {
                tracing::warn!(
                    library = %self.name,
                    command = cmd.command_type(),
                    error = %err,
                    "command rejected"
                );
                Err(err)
            }
        }
    }

    fn log_accepted(&self, event: &LibraryEvent) {
        match event {
            LibraryEvent::BookRegistered(e) => tracing::info!(
                library = %self.name,
                book_id = %e.book_id,
                title = %e.title,
                author = %e.author,
                "book registered"
            ),
            LibraryEvent::BookLent(e) => tracing::info!(
                library = %self.name,
                book_id = %e.book_id,
                borrower = %e.borrower,
                "book lent"
            ),
            LibraryEvent::BookReturned(e) => tracing::info!(
                library = %self.name,
                book_id = %e.book_id,
                "book returned"
            ),
        }
    }

    fn book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id_typed() == id)
    }

    fn find_book(&self, id: BookId) -> DomainResult<&Book> {
        self.book(id).ok_or(DomainError::not_found(id))
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for Library {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for Library {
    type Command = LibraryCommand;
    type Event = LibraryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            LibraryEvent::BookRegistered(e) => {
                self.ids.observe(e.book_id);
                self.books
                    .push(Book::new(e.book_id, e.title.clone(), e.author.clone()));
            }
            LibraryEvent::BookLent(e) => {
                let lent = match self.book_mut(e.book_id) {
                    Some(book) => book.lend(e.borrower.as_str()).is_ok(),
                    None => false,
                };
                if lent {
                    self.loans.record(e.book_id, e.borrower.clone());
                } else {
                    tracing::error!(book_id = %e.book_id, "lent event does not match state");
                }
            }
            LibraryEvent::BookReturned(e) => {
                if let Some(book) = self.book_mut(e.book_id) {
                    book.return_book();
                }
                self.loans.close(e.book_id);
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            LibraryCommand::RegisterBook(cmd) => self.handle_register(cmd),
            LibraryCommand::LendBook(cmd) => self.handle_lend(cmd),
            LibraryCommand::ReturnBook(cmd) => self.handle_return(cmd),
        }
    }
}

impl Library {
    fn handle_register(&self, cmd: &RegisterBook) -> Result<Vec<LibraryEvent>, DomainError> {
        let title = NonEmptyText::parse("title", cmd.title.as_str())?;
        let author = NonEmptyText::parse("author", cmd.author.as_str())?;

        if self.books.iter().any(|b| b.has_same_title(title.as_str())) {
            return Err(DomainError::duplicate_title(title.as_str()));
        }

        Ok(vec![LibraryEvent::BookRegistered(BookRegistered {
            book_id: self.ids.peek(),
            title,
            author,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_lend(&self, cmd: &LendBook) -> Result<Vec<LibraryEvent>, DomainError> {
        let book = self.find_book(cmd.book_id)?;

        if !book.is_available() {
            return Err(DomainError::invalid_state(format!(
                "book '{}' is not available",
                book.title()
            )));
        }

        let borrower = NonEmptyText::parse("borrower", cmd.borrower.as_str())?;

        Ok(vec![LibraryEvent::BookLent(BookLent {
            book_id: cmd.book_id,
            borrower,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_return(&self, cmd: &ReturnBook) -> Result<Vec<LibraryEvent>, DomainError> {
        let book = self.find_book(cmd.book_id)?;

        if book.is_available() {
            return Err(DomainError::invalid_state(format!(
                "book '{}' is not on loan",
                book.title()
            )));
        }

        Ok(vec![LibraryEvent::BookReturned(BookReturned {
            book_id: cmd.book_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}
