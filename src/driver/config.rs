/*!
 * Driver Configuration
 *
 * Runtime configuration for the producer/consumer drivers
 */

use std::time::Duration;

/// Producer/consumer driver configuration
///
/// The channel does not interpret any of this; it only shapes how the
/// drivers call it.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Number of values to hand off
    pub iterations: u64,
    /// Artificial pacing between operations (`None` = full speed)
    pub step_delay: Option<Duration>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            step_delay: None,
        }
    }
}

impl DriverConfig {
    /// Human-paced run with readable trace output
    pub const fn demo() -> Self {
        Self {
            iterations: 10,
            step_delay: Some(Duration::from_millis(200)),
        }
    }

    /// Full-speed run for stress and liveness checks
    pub const fn soak() -> Self {
        Self {
            iterations: 1000,
            step_delay: None,
        }
    }
}
