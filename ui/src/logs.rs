//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Debug output from this crate and from the fetch controllers, errors from
/// everything else.
pub const DEFAULT_FILTER: &str = "error,ui=debug,fetch=debug";

pub fn init_logging() {
    init_logging_with(DEFAULT_FILTER);
}

/// Initialize console logging with `EnvFilter` directives. Only the first
/// call installs a subscriber.
pub fn init_logging_with(directives: &str) {
    let env_filter = EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        return;
    }

    tracing::info!(directives, "Initialized logs");
}
