//! Diagnostic tracing for the solver.
//!
//! Tracing goes to stderr so the results table on stdout stays clean.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a run.
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "advent=debug" } else { "warn" }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--debug` selects `advent=debug`
/// and the default is `warn`. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=advent=trace cargo run -- --day 6
/// ```
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
