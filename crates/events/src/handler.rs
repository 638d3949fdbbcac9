use libris_core::Aggregate;

use crate::{Command, Event};

/// Execute an aggregate command deterministically (no IO, no async).
///
/// 1. **Decide**: calls `aggregate.handle(command)` to get events (no mutation)
/// 2. **Evolve**: applies each event via `aggregate.apply(event)`
///
/// If `handle` rejects the command nothing is applied, so the aggregate is
/// exactly as it was before the call.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: Aggregate,
    A::Command: Command,
    A::Event: Event,
{
    let events = match aggregate.handle(command) {
        Ok(events) => events,
        Err(err) => {
            tracing::debug!(
                command = command.command_type(),
                error = ?err,
                "command rejected"
            );
            return Err(err);
        }
    };

    for ev in &events {
        aggregate.apply(ev);
        tracing::debug!(
            command = command.command_type(),
            event = ev.event_type(),
            version = aggregate.version(),
            "event applied"
        );
    }
    Ok(events)
}

/// Rebuild state by applying already-accepted events in order.
///
/// Returns the aggregate's version after the last event.
pub fn replay<'a, A, I>(aggregate: &mut A, events: I) -> u64
where
    A: Aggregate,
    A::Event: Event + 'a,
    I: IntoIterator<Item = &'a A::Event>,
{
    for ev in events {
        aggregate.apply(ev);
    }
    aggregate.version()
}
