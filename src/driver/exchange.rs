/*!
 * Exchange Orchestration
 *
 * Spawns the two actors against one shared channel and joins both before
 * returning, so the channel and its synchronization primitives outlive
 * every thread that touches them.
 */

use super::config::DriverConfig;
use super::consumer::consume;
use super::producer::produce;
use crate::core::sync::Handoff;
use crate::monitoring::ExchangeSpan;
use std::io;
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tracing::info;

/// Exchange orchestration errors
///
/// The channel itself has no failure mode; only spawning and joining the
/// actor threads can go wrong.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to spawn {role} thread: {source}")]
    Spawn {
        role: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{role} thread panicked")]
    Panicked { role: &'static str },
}

/// Run one producer/consumer exchange to completion
///
/// Returns the values in the order the consumer received them. The slot
/// strictly alternates EMPTY and FULL, so this is always the ascending
/// sequence `1..=iterations`.
pub fn run_exchange(config: DriverConfig) -> Result<Vec<u64>, DriverError> {
    let span = ExchangeSpan::new(config.iterations);
    let handoff = Arc::new(Handoff::new());

    // Consumer first; it parks harmlessly on the empty slot.
    let consumer = {
        let handoff = Arc::clone(&handoff);
        let config = config.clone();
        thread::Builder::new()
            .name("consumer".into())
            .spawn(move || consume(&handoff, &config))
            .map_err(|source| DriverError::Spawn {
                role: "consumer",
                source,
            })?
    };

    let producer = {
        let handoff = Arc::clone(&handoff);
        let config = config.clone();
        thread::Builder::new()
            .name("producer".into())
            .spawn(move || produce(&handoff, &config))
            .map_err(|source| DriverError::Spawn {
                role: "producer",
                source,
            })?
    };

    producer
        .join()
        .map_err(|_| DriverError::Panicked { role: "producer" })?;
    let delivered = consumer
        .join()
        .map_err(|_| DriverError::Panicked { role: "consumer" })?;

    let stats = handoff.stats();
    info!(puts = stats.puts, takes = stats.takes, "exchange drained");
    span.record_delivered(delivered.len());

    Ok(delivered)
}
