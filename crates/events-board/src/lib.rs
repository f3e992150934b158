//! Event board client
//!
//! A Redux-style state store for the event list, kept in sync with the
//! events REST API.
//!
//! # Architecture
//!
//! ```text
//!  Console (input/render)
//!      │ commands
//!      ▼
//!  EventsController ──── EventsClient ───► REST API
//!      │ Action (only after a successful call)
//!      ▼
//!  Store ── Middleware chain ── reduce(state, action) ──► AppState
//! ```
//!
//! The reducer is pure and never performs I/O; the controller is the only
//! place that talks to the network.

pub mod actions;
pub mod commands;
pub mod console;
pub mod controller;
pub mod logger;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use actions::Action;
pub use controller::{EventsController, LoadStatus};
pub use reducers::reduce;
pub use state::AppState;
pub use store::Store;
