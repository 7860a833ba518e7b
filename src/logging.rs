//! Diagnostic logging on stderr.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the given `-v` count and `-q` flag.
///
/// `-q` wins over `-v`. `RUST_LOG`, when set, replaces the result entirely.
#[must_use]
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn env_filter(verbose: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)))
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let fmt_layer = fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
