//! `PostgreSQL` sink for the seed loader.
//!
//! Uses [`sqlx`] with runtime query construction (not compile-time checked)
//! so no live database is needed at build time. Every insert is
//! parameterized.

use std::time::Duration;

use async_trait::async_trait;
use events_config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::dataset::SeedRow;
use crate::error::SeedError;
use crate::sink::SeedSink;

/// Connection timeout for acquiring a pooled connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Column names are left unquoted, so Postgres folds `ticketPrice` to
/// `ticketprice`; both the DDL and the insert rely on that.
const CREATE_TABLE_SQL: &str = r"CREATE TABLE IF NOT EXISTS events (
    id SERIAL PRIMARY KEY,
    date DATE NOT NULL,
    time TIME NOT NULL,
    ticketPrice NUMERIC(10, 2) NOT NULL,
    bandName TEXT NOT NULL,
    venueName TEXT NOT NULL,
    venueAddress TEXT NOT NULL
)";

const INSERT_SQL: &str = r"INSERT INTO events (date, time, ticketPrice, bandName, venueName, venueAddress)
    VALUES ($1::DATE, $2::TIME, $3::NUMERIC, $4, $5, $6)";

/// Build sqlx connect options from the configuration.
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(&config.database);

    if config.password.is_empty() {
        options
    } else {
        options.password(&config.password)
    }
}

/// Seed sink writing to the `events` table.
pub struct PostgresSink {
    pool: PgPool,
}

impl PostgresSink {
    /// Open a connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Connect`] if no connection can be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, SeedError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(CONNECT_TIMEOUT)
            .connect_with(connect_options(config))
            .await
            .map_err(|source| SeedError::Connect {
                target: config.display_target(),
                source,
            })?;

        log::info!("Connected to PostgreSQL at {}", config.display_target());
        Ok(Self { pool })
    }

    /// Create the `events` table if it does not exist yet.
    pub async fn ensure_table(&self) -> Result<(), SeedError> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(&self.pool)
            .await
            .map_err(SeedError::Schema)?;
        log::info!("Ensured events table exists");
        Ok(())
    }

    /// Return a reference to the underlying [`PgPool`].
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SeedSink for PostgresSink {
    async fn insert(&mut self, row: &SeedRow) -> Result<(), SeedError> {
        sqlx::query(INSERT_SQL)
            .bind(&row.date)
            .bind(&row.time)
            .bind(row.ticket_price)
            .bind(&row.band_name)
            .bind(&row.venue_name)
            .bind(&row.venue_address)
            .execute(&self.pool)
            .await
            .map_err(SeedError::Insert)?;
        Ok(())
    }

    async fn close(&mut self) {
        self.pool.close().await;
        log::info!("PostgreSQL pool closed");
    }
}
