//! Error types for the seed loader.

/// Errors that can occur while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Could not open the connection pool.
    #[error("failed to connect to {target}: {source}")]
    Connect {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    /// Creating the `events` table failed.
    #[error("failed to create events table: {0}")]
    Schema(#[source] sqlx::Error),

    /// A single insert failed.
    #[error("insert failed: {0}")]
    Insert(#[source] sqlx::Error),

    /// A sink that is not backed by sqlx rejected a row.
    #[error("insert rejected: {0}")]
    Rejected(String),
}
