/// A request to change an aggregate (command abstraction).
///
/// - **Command**: intent to do something (e.g. "lend book 3 to Ana")
/// - **Event**: fact that something happened (e.g. "BookLent { book_id: 3, .. }")
///
/// Commands are rejected if invalid; events represent accepted changes.
/// Commands own all their data so they can be logged or retried freely.
pub trait Command: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable command name used in diagnostics (e.g. "library.lend_book").
    fn command_type(&self) -> &'static str;
}
