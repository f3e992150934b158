//! Application State
//!
//! The single state container. It is owned by the [`crate::store::Store`]
//! and only changes through dispatched actions.

use events_client::{Event, EventId};
use std::sync::Arc;

/// Application state
///
/// The event lists sit behind `Arc` so a reduction that leaves a list alone
/// hands the same allocation to the next state. Cloning an `AppState` is
/// therefore cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// The currently visible events, in the order the API returned them
    pub events: Arc<Vec<Event>>,
    /// Events the user liked, append-only (liking twice stores two entries)
    pub liked_events: Arc<Vec<Event>>,
    /// The event being edited; `Some` exactly while the edit form is shown
    pub event_to_edit: Option<Event>,
}

impl AppState {
    /// Whether the edit form is active
    pub fn show_edit_form(&self) -> bool {
        self.event_to_edit.is_some()
    }

    /// Find a visible event by id
    pub fn find_event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }
}
