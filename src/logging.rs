// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber: env-filtered, stderr.
///
/// Reports go to stdout; everything diagnostic (probe failures, stage
/// transitions, final counts) stays on stderr so the two streams can be
/// split. `RUST_LOG` overrides the default `info` level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
