//! Tracing subscriber setup shared by all binaries.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `level` is an `EnvFilter` directive string (the value of `RUST_LOG`);
/// an unparseable directive falls back to `info`. `format` is `json` for
/// machine-readable output, anything else for human-readable text.
pub fn init(level: &str, format: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
