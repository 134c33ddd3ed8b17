/*!
 * Handoff Demo - Main Entry Point
 *
 * Runs one producer and one consumer against a shared single-slot channel
 * and waits for both to finish before exiting.
 */

use std::error::Error;
use tracing::info;

use handoff::{init_tracing, run_exchange, DriverConfig};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize structured tracing
    init_tracing();

    info!("Single-slot handoff demo starting");

    let config = DriverConfig::demo();
    info!(
        iterations = config.iterations,
        paced = config.step_delay.is_some(),
        "Starting exchange"
    );

    let delivered = run_exchange(config)?;

    info!(delivered = delivered.len(), "Exchange complete");
    Ok(())
}
