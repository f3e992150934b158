//! Shared fixtures for unit tests

use async_trait::async_trait;
use events_client::{
    Band, ClientError, ClientResult, Event, EventFilter, EventId, EventsClient, NewEvent, Venue,
};
use std::sync::{Arc, Mutex};

/// An event whose fields are derived from its id
pub fn event(id: i64) -> Event {
    priced(id, 10.0 + id as f64)
}

/// Same as [`event`] with an explicit ticket price
pub fn priced(id: i64, ticket_price: f64) -> Event {
    Event {
        id: EventId::from_raw(id),
        date: format!("2024-11-{:02}", id.rem_euclid(28) + 1),
        time: "20:00".to_string(),
        ticket_price,
        band: Band {
            name: format!("Band {}", id),
        },
        venue: Venue {
            name: format!("Venue {}", id),
            address: format!("{} Main St", id),
        },
    }
}

pub fn new_event(band: &str) -> NewEvent {
    NewEvent {
        date: "2024-12-01".to_string(),
        time: "19:30".to_string(),
        ticket_price: 25.0,
        band: Band {
            name: band.to_string(),
        },
        venue: Venue {
            name: "The Chapel".to_string(),
            address: "777 Valencia St".to_string(),
        },
    }
}

#[derive(Debug, Default)]
struct MockInner {
    events: Vec<Event>,
    search_results: Vec<Event>,
    failing: bool,
    hanging: bool,
    calls: Vec<&'static str>,
    last_filter: Option<EventFilter>,
}

/// In-memory events API
///
/// Clones share state, so a test can keep a handle after giving one to the
/// controller and flip it into failure mode mid-test.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    inner: Arc<Mutex<MockInner>>,
}

impl MockClient {
    pub fn new(events: Vec<Event>) -> Self {
        let client = Self::default();
        client.inner.lock().unwrap().events = events;
        client
    }

    /// Every call fails with a transport error
    pub fn failing(self) -> Self {
        self.set_failing(true);
        self
    }

    /// Every call stays pending forever
    pub fn hanging(self) -> Self {
        self.inner.lock().unwrap().hanging = true;
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    pub fn set_search_results(&self, events: Vec<Event>) {
        self.inner.lock().unwrap().search_results = events;
    }

    /// Names of the API calls made so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn last_filter(&self) -> Option<EventFilter> {
        self.inner.lock().unwrap().last_filter.clone()
    }

    /// Record a call and decide how it ends; `None` means "hang"
    fn begin(&self, call: &'static str) -> Option<ClientResult<()>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(call);
        if inner.hanging {
            return None;
        }
        if inner.failing {
            return Some(Err(ClientError::Other(format!("{} failed", call))));
        }
        Some(Ok(()))
    }

    async fn gate(&self, call: &'static str) -> ClientResult<()> {
        match self.begin(call) {
            Some(result) => result,
            None => std::future::pending().await,
        }
    }
}

#[async_trait]
impl EventsClient for MockClient {
    async fn list_events(&self) -> ClientResult<Vec<Event>> {
        self.gate("list").await?;
        Ok(self.inner.lock().unwrap().events.clone())
    }

    async fn create_event(&self, event: &NewEvent) -> ClientResult<Event> {
        self.gate("create").await?;
        let mut inner = self.inner.lock().unwrap();
        let next_id = inner.events.iter().map(|e| e.id.value()).max().unwrap_or(0) + 1;
        let created = event.clone().with_id(EventId::from_raw(next_id));
        inner.events.push(created.clone());
        Ok(created)
    }

    async fn delete_event(&self, id: EventId) -> ClientResult<()> {
        self.gate("delete").await?;
        self.inner.lock().unwrap().events.retain(|e| e.id != id);
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> ClientResult<Event> {
        self.gate("update").await?;
        let mut inner = self.inner.lock().unwrap();
        for stored in inner.events.iter_mut().filter(|e| e.id == event.id) {
            *stored = event.clone();
        }
        Ok(event.clone())
    }

    async fn search_events(&self, filter: &EventFilter) -> ClientResult<Vec<Event>> {
        self.inner.lock().unwrap().last_filter = Some(filter.clone());
        self.gate("search").await?;
        Ok(self.inner.lock().unwrap().search_results.clone())
    }
}
