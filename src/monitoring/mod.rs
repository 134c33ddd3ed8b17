/*!
 * Run Observability
 * Structured tracing for the exchange run
 */

mod tracer;

pub use tracer::{init_tracing, ExchangeSpan};
