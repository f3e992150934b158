//! Events Controller
//!
//! Orchestrates remote calls and store dispatches:
//! - calls the events API through [`EventsClient`]
//! - dispatches the results into the [`Store`] on success
//! - logs failures and hands them back to the caller
//!
//! The store never sees a failed call. Nothing is applied optimistically, so
//! a failed create/delete/update simply leaves local state as it was.

use crate::actions::Action;
use crate::state::AppState;
use crate::store::Store;
use events_client::{ClientResult, Event, EventFilter, EventId, EventsClient, NewEvent};
use std::sync::Arc;

/// Status of the initial event load (the view's spinner and error message)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Not started loading
    #[default]
    Idle,
    /// Currently loading
    Loading,
    /// Successfully loaded
    Loaded,
    /// Failed to load; the message is shown to the user
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Message shown when the initial load fails
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load events";

/// Owns the store and synchronizes it with the remote events API
pub struct EventsController {
    client: Arc<dyn EventsClient>,
    store: Store,
    load_status: LoadStatus,
}

impl EventsController {
    pub fn new(client: Arc<dyn EventsClient>, store: Store) -> Self {
        Self {
            client,
            store,
            load_status: LoadStatus::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Dispatch an action that needs no remote call
    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    /// Fetch the full collection and replace the visible events
    ///
    /// On failure the load status carries the user-facing error; the loading
    /// indicator stops either way.
    pub async fn load(&mut self) -> ClientResult<()> {
        self.load_status = LoadStatus::Loading;

        match self.client.list_events().await {
            Ok(events) => {
                log::info!("Loaded {} events", events.len());
                self.store.dispatch(Action::set_events(events));
                self.load_status = LoadStatus::Loaded;
                Ok(())
            }
            Err(e) => {
                log::error!("Error fetching events: {}", e);
                self.load_status = LoadStatus::Failed(LOAD_ERROR_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Fetch the full collection again after the board is up
    ///
    /// Unlike [`Self::load`], a failure here is only logged and returned; the
    /// list already on screen stays visible. A success also clears a failed
    /// initial load.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        match self.client.list_events().await {
            Ok(events) => {
                log::info!("Reloaded {} events", events.len());
                self.store.dispatch(Action::set_events(events));
                self.load_status = LoadStatus::Loaded;
                Ok(())
            }
            Err(e) => {
                log::error!("Error reloading events: {}", e);
                Err(e)
            }
        }
    }

    /// Create an event remotely and append the stored version
    pub async fn add_event(&mut self, event: NewEvent) -> ClientResult<Event> {
        match self.client.create_event(&event).await {
            Ok(created) => {
                log::info!("Added event {} ({})", created.id, created.band.name);
                self.store.dispatch(Action::add_event(created.clone()));
                Ok(created)
            }
            Err(e) => {
                log::error!("Error adding event: {}", e);
                Err(e)
            }
        }
    }

    /// Delete remotely, then locally; a failed request leaves the event visible
    pub async fn delete_event(&mut self, id: EventId) -> ClientResult<()> {
        match self.client.delete_event(id).await {
            Ok(()) => {
                log::info!("Deleted event {}", id);
                self.store.dispatch(Action::delete_event(id));
                Ok(())
            }
            Err(e) => {
                log::error!("Error deleting event {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Like an event (local only)
    pub fn like_event(&mut self, event: Event) {
        self.store.dispatch(Action::like_event(event));
    }

    /// Apply a filter
    ///
    /// The liked filter is resolved locally from the liked list without a
    /// network call. Any other filter becomes a single search request.
    pub async fn filter_events(&mut self, filter: &EventFilter) -> ClientResult<()> {
        if filter.liked {
            let liked = self.store.state().liked_events.as_ref().clone();
            log::debug!("Showing {} liked events", liked.len());
            self.store.dispatch(Action::filter_events(liked));
            return Ok(());
        }

        match self.client.search_events(filter).await {
            Ok(events) => {
                log::info!("Filter matched {} events", events.len());
                self.store.dispatch(Action::filter_events(events));
                Ok(())
            }
            Err(e) => {
                log::error!("Error filtering events: {}", e);
                Err(e)
            }
        }
    }

    /// Enter edit mode for an event
    pub fn edit_event(&mut self, event: Event) {
        self.store.dispatch(Action::show_edit_form(event));
    }

    /// Save an edited event
    ///
    /// On success the stored version replaces the local one and edit mode
    /// closes. On failure edit mode stays open with the unsaved event.
    pub async fn update_event(&mut self, event: Event) -> ClientResult<Event> {
        match self.client.update_event(&event).await {
            Ok(updated) => {
                log::info!("Updated event {}", updated.id);
                self.store.dispatch(Action::update_event(updated.clone()));
                self.store.dispatch(Action::hide_edit_form());
                Ok(updated)
            }
            Err(e) => {
                log::error!("Error updating event {}: {}", event.id, e);
                Err(e)
            }
        }
    }

    /// Leave edit mode, discarding the in-progress edit
    pub fn cancel_edit(&mut self) {
        self.store.dispatch(Action::hide_edit_form());
    }
}
