//! tracing subscriber setup
//!
//! Logs go to stderr so stdout only ever carries the rendered document.
//! `RUST_LOG` wins over the verbosity flags when set.

use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Filter directive for a `-v` count
pub fn default_directive(verbosity: u8, debug: bool) -> String {
    let level = match (verbosity, debug) {
        (0, false) => "error",
        (1, false) => "info",
        (0..=2, _) => "debug",
        _ => "trace",
    };
    format!("apilab={}", level)
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_tracing(verbosity: u8, debug: bool, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, debug)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
