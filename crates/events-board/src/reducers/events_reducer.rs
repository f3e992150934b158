//! Events Reducer
//!
//! Handles the visible event list and the liked list.

use crate::actions::EventsAction;
use crate::state::AppState;
use std::sync::Arc;

/// Reduce event list state based on [`EventsAction`]
///
/// Lists are copied on write (`Arc::make_mut`): if the previous state still
/// holds the list, the reducer works on a fresh copy and the old state keeps
/// its own.
pub fn reduce_events(mut state: AppState, action: &EventsAction) -> AppState {
    match action {
        EventsAction::Set(events) | EventsAction::Filter(events) => {
            state.events = Arc::new(events.clone());
        }

        EventsAction::Add(event) => {
            Arc::make_mut(&mut state.events).push(event.clone());
        }

        EventsAction::Delete(id) => {
            if !state.events.iter().any(|e| e.id == *id) {
                log::debug!("Delete: event {} not in list, nothing to remove", id);
                return state;
            }
            Arc::make_mut(&mut state.events).retain(|e| e.id != *id);
        }

        EventsAction::Like(event) => {
            Arc::make_mut(&mut state.liked_events).push(event.clone());
        }

        EventsAction::Update(updated) => {
            if !state.events.iter().any(|e| e.id == updated.id) {
                log::debug!("Update: event {} not in list, nothing to replace", updated.id);
                return state;
            }
            for event in Arc::make_mut(&mut state.events).iter_mut() {
                if event.id == updated.id {
                    *event = updated.clone();
                }
            }
        }
    }
    state
}
