//! Events API data transfer objects
//!
//! These types mirror the JSON exchanged with the events REST API.
//! Field names are camelCase on the wire (`ticketPrice`).

use serde::{Deserialize, Serialize};

/// Identifier of an event, assigned by the remote store
///
/// The client never fabricates one; it is always echoed back from
/// a create or update response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// Wrap a raw id (use for ids read back from the API or typed by the user)
    pub fn from_raw(value: i64) -> Self {
        EventId(value)
    }

    /// Get the raw value (for URLs, display, etc.)
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EventId)
    }
}

/// The band playing an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub name: String,
}

/// Where an event takes place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub address: String,
}

/// A scheduled performance as returned by the events API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,

    /// Opaque date string, format owned by the API
    pub date: String,

    /// Opaque time string, format owned by the API
    pub time: String,

    pub ticket_price: f64,

    pub band: Band,

    pub venue: Venue,
}

/// An event that has not been stored yet (no id)
///
/// This is the body of a create request; the response carries the
/// assigned [`EventId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub date: String,
    pub time: String,
    pub ticket_price: f64,
    pub band: Band,
    pub venue: Venue,
}

impl NewEvent {
    /// Attach an id, producing the stored form of this event
    pub fn with_id(self, id: EventId) -> Event {
        Event {
            id,
            date: self.date,
            time: self.time,
            ticket_price: self.ticket_price,
            band: self.band,
            venue: self.venue,
        }
    }
}
