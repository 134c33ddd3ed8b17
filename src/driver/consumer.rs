/*!
 * Consumer Driver
 *
 * Drains the handoff slot a fixed number of times
 */

use super::config::DriverConfig;
use crate::core::sync::Handoff;
use std::thread;
use tracing::debug;

/// Run the consumer loop: `take()` exactly `iterations` times
///
/// Returns the values in delivery order. Blocks inside `take` whenever no
/// value is pending.
pub fn consume(handoff: &Handoff<u64>, config: &DriverConfig) -> Vec<u64> {
    let mut delivered = Vec::with_capacity(config.iterations as usize);

    for _ in 0..config.iterations {
        let value = handoff.take();
        debug!(value, "drained value");
        delivered.push(value);

        if let Some(delay) = config.step_delay {
            thread::sleep(delay);
        }
    }

    delivered
}
