/*!
 * Structured Tracing
 * Subscriber setup and the span wrapping one exchange run
 *
 * Trace output is observability only; the handoff protocol carries no
 * meaning through it.
 */

use std::time::Instant;
use tracing::{info, span, Level, Span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - HANDOFF_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("HANDOFF_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for structured parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true),
            )
            .init();
    } else {
        // Human-readable output; the actors are named threads, so the
        // thread-name field identifies who produced each line
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_names(true)
                    .compact(),
            )
            .init();
    }
}

/// Span covering one full exchange run
///
/// Records the iteration count up front and the delivered count plus
/// duration when dropped.
pub struct ExchangeSpan {
    span: Span,
    start: Instant,
}

impl ExchangeSpan {
    pub fn new(iterations: u64) -> Self {
        let span = span!(
            Level::INFO,
            "exchange",
            iterations,
            delivered = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        let _entered = span.enter();
        info!(iterations, "exchange started");
        drop(_entered);

        Self {
            span,
            start: Instant::now(),
        }
    }

    /// Record how many values the consumer received
    pub fn record_delivered(&self, count: usize) {
        self.span.record("delivered", count);
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for ExchangeSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();

        self.span.record("duration_ms", duration.as_millis());
        info!(duration_ms = duration.as_millis(), "exchange completed");
    }
}
