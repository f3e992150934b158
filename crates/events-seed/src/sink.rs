//! Seed sink trait
//!
//! The runner writes rows through [`SeedSink`] so the loop can be tested
//! without a database. [`crate::PostgresSink`] is the production sink.

use crate::dataset::SeedRow;
use crate::error::SeedError;
use async_trait::async_trait;

/// Destination of seeded rows
#[async_trait]
pub trait SeedSink: Send {
    /// Insert one row; each insert commits on its own
    async fn insert(&mut self, row: &SeedRow) -> Result<(), SeedError>;

    /// Release the underlying connections
    async fn close(&mut self);
}
