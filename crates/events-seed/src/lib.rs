//! # events-seed
//!
//! One-shot loader that fills the `events` table with a fixed dataset.
//!
//! ```text
//! EVENT_DATA ──▶ run_seed ──▶ SeedSink::insert (one row at a time)
//!                    │
//!                    └──────▶ SeedSink::close (exactly once)
//! ```
//!
//! The run stops at the first failed insert. Rows inserted before it stay
//! committed, and running the loader twice inserts every row twice.

pub mod dataset;
pub mod error;
pub mod postgres;
pub mod runner;
pub mod sink;

pub use dataset::{SeedEvent, SeedRow, EVENT_DATA};
pub use error::SeedError;
pub use postgres::{connect_options, PostgresSink};
pub use runner::{run_seed, SeedReport};
pub use sink::SeedSink;
