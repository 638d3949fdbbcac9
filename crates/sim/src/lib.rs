//! Console simulation of a small lending library.

pub mod console;
pub mod session;

pub use console::Console;
pub use session::{SessionSummary, run};
