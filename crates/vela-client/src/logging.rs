//! Logging setup for the client boundary

use tracing_subscriber::EnvFilter;

use vela_core::LogLevel;

/// Install the process-wide subscriber at the boundary log level
///
/// `RUST_LOG` overrides the boundary level when set. Installation is
/// best-effort: a host that already owns a subscriber keeps it.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
