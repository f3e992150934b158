//! The seeding loop
//!
//! Rows are inserted one by one, in dataset order. The first failure stops
//! the loop. Rows already inserted stay committed. The sink is closed
//! exactly once whichever way the loop ends.

use crate::dataset::SeedEvent;
use crate::error::SeedError;
use crate::sink::SeedSink;

/// Outcome of one seeding run
#[derive(Debug)]
pub struct SeedReport {
    /// Rows committed before the loop stopped
    pub inserted: usize,
    /// Rows in the dataset
    pub total: usize,
    /// The insert error that stopped the loop, if any
    pub failure: Option<SeedError>,
}

impl SeedReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Insert every event through `sink`, then close it.
pub async fn run_seed<S: SeedSink>(mut sink: S, events: &[SeedEvent]) -> SeedReport {
    let total = events.len();
    let mut inserted = 0;
    let mut failure = None;

    for event in events {
        let row = event.to_row();
        match sink.insert(&row).await {
            Ok(()) => {
                inserted += 1;
                log::debug!(
                    "Inserted {} at {} on {}",
                    row.band_name,
                    row.venue_name,
                    row.date
                );
            }
            Err(e) => {
                log::error!("Error seeding data: {}", e);
                failure = Some(e);
                break;
            }
        }
    }

    sink.close().await;

    if failure.is_none() {
        log::info!("Seed data inserted successfully ({} rows)", inserted);
    } else {
        log::warn!("Seeding stopped after {} of {} rows", inserted, total);
    }

    SeedReport {
        inserted,
        total,
        failure,
    }
}
