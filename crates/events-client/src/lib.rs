//! Events API client
//!
//! This crate provides a trait-based client for the events REST API.
//! The application talks to the [`EventsClient`] trait; the reqwest-backed
//! [`HttpEventsClient`] is the production implementation and tests swap in
//! their own doubles.
//!
//! # Example
//!
//! ```rust,no_run
//! use events_client::{EventsClient, HttpEventsClient};
//! use std::time::Duration;
//!
//! # async fn example() -> events_client::ClientResult<()> {
//! let client = HttpEventsClient::new("http://localhost:3000", Duration::from_secs(30))?;
//! let events = client.list_events().await?;
//! println!("{} events", events.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod types;

pub use client::EventsClient;
pub use error::{ClientError, ClientResult};
pub use filter::EventFilter;
pub use http_client::HttpEventsClient;
pub use types::{Band, Event, EventId, NewEvent, Venue};
