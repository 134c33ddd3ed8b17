/*!
 * Producer Driver
 *
 * Feeds an ascending sequence into the handoff slot
 */

use super::config::DriverConfig;
use crate::core::sync::Handoff;
use std::thread;
use tracing::debug;

/// Run the producer loop: `put(i)` for `i` in `1..=iterations`
///
/// Blocks inside `put` whenever the previous value has not been drained
/// yet.
pub fn produce(handoff: &Handoff<u64>, config: &DriverConfig) {
    for value in 1..=config.iterations {
        handoff.put(value);
        debug!(value, "buffered value");

        if let Some(delay) = config.step_delay {
            thread::sleep(delay);
        }
    }
}
