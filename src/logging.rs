//! File logging. The terminal belongs to the TUI, so every event goes to a
//! daily-rolled file under the data directory.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "SQLPAD_LOG";
pub const LOG_FILE_NAME: &str = "sqlpad.log";

/// `SQLPAD_LOG` when it parses, else `configured`, else `info`.
pub fn build_filter(env_value: Option<&str>, configured: &str) -> EnvFilter {
    env_value
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Initializes the global subscriber writing to `<log_dir>/sqlpad.log.<date>`.
///
/// Returns a guard that must be kept alive for logging to work. When the
/// guard is dropped, buffered lines are flushed.
pub fn init(log_dir: &Path, configured_filter: &str) -> WorkerGuard {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(env_value.as_deref(), configured_filter);

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .compact(),
        )
        .try_init();

    guard
}
