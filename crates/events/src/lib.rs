//! Commands, events and the decide-then-apply execution helpers.

pub mod command;
pub mod event;
pub mod handler;

pub use command::Command;
pub use event::Event;
pub use handler::{execute, replay};
