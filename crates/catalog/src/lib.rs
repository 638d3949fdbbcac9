//! Library catalog domain module.
//!
//! Books, the loan ledger and the library that owns both, implemented as
//! deterministic domain logic (no IO, no storage). Loan state on a [`Book`]
//! can only be changed from inside this crate, through [`Library`].

pub mod book;
pub mod ledger;
pub mod library;
pub mod report;

pub use book::{Book, BookStatus};
pub use ledger::{LoanEntry, LoanLedger};
pub use library::{
    BookLent, BookRegistered, BookReturned, LendBook, Library, LibraryCommand, LibraryEvent,
    RegisterBook, ReturnBook,
};
pub use report::{ActiveLoan, ActiveLoansReport, AvailableBooksReport};
