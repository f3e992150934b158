//! Event list actions
//!
//! Payloads always come from the remote store (or from the local liked
//! list); the reducer never invents events or ids.

use events_client::{Event, EventId};

#[derive(Debug, Clone, PartialEq)]
pub enum EventsAction {
    /// Replace the visible events with a fresh fetch
    Set(Vec<Event>),
    /// Append a newly created event
    Add(Event),
    /// Remove the event with this id (no-op if absent)
    Delete(EventId),
    /// Append to the liked list (duplicates are kept)
    Like(Event),
    /// Replace the visible events with filtered results
    Filter(Vec<Event>),
    /// Replace the event carrying the same id (no-op if absent)
    Update(Event),
}
