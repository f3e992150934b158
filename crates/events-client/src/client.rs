//! Events client trait
//!
//! This module defines the core `EventsClient` trait that all client
//! implementations must satisfy.

use crate::error::ClientResult;
use crate::filter::EventFilter;
use crate::types::{Event, EventId, NewEvent};
use async_trait::async_trait;

/// Events API client trait
///
/// Defines the interface for the remote events store. Implementations can
/// talk HTTP ([`crate::HttpEventsClient`]) or be in-memory doubles for tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use events_client::{Event, EventsClient};
///
/// async fn everything(client: &dyn EventsClient) -> events_client::ClientResult<Vec<Event>> {
///     client.list_events().await
/// }
/// ```
#[async_trait]
pub trait EventsClient: Send + Sync {
    /// Fetch the full event collection (`GET /api/events`)
    async fn list_events(&self) -> ClientResult<Vec<Event>>;

    /// Store a new event (`POST /api/events`)
    ///
    /// # Returns
    ///
    /// The stored event, carrying the id assigned by the server.
    async fn create_event(&self, event: &NewEvent) -> ClientResult<Event>;

    /// Delete an event by id (`DELETE /api/events/{id}`)
    ///
    /// The response body is ignored; only the status matters.
    async fn delete_event(&self, id: EventId) -> ClientResult<()>;

    /// Replace an existing event (`PUT /api/events/{id}`)
    ///
    /// # Returns
    ///
    /// The event as stored by the server.
    async fn update_event(&self, event: &Event) -> ClientResult<Event>;

    /// Search events (`GET /api/events/search?date=&band=&venue=`)
    ///
    /// Only the date/band/venue criteria are sent; the `liked` flag is a
    /// local concern and is ignored here.
    async fn search_events(&self, filter: &EventFilter) -> ClientResult<Vec<Event>>;
}
