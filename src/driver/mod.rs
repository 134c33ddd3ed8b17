/*!
 * Exchange Drivers
 *
 * The producer and consumer collaborators plus the orchestration that runs
 * them. The drivers contain no synchronization logic of their own; all
 * blocking and wake-up lives in `core::sync::Handoff`.
 */

mod config;
mod consumer;
mod exchange;
mod producer;

pub use config::DriverConfig;
pub use consumer::consume;
pub use exchange::{run_exchange, DriverError};
pub use producer::produce;
