//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with a rotating-file fmt layer, setting
//! up the pipeline from `tracing` macros to disk. Log output never goes to
//! the terminal, which the UI owns while the application runs.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::LogWriter;
use crate::Config;

/// Initializes the tracing subscriber with file-based log output.
///
/// # Level Resolution
///
/// 1. `config.trace_level` if set (an `EnvFilter` directive, e.g. `"debug"`
///    or `"medidex=trace"`)
/// 2. Default: `"info"`
///
/// # File Location
///
/// Logs are written to `<data dir>/medidex.log`, rotated by size with a small
/// number of backups retained.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently skips setup if directory creation fails (logging is optional)
/// - Idempotent: safe to call multiple times (only the first call takes effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = LogWriter::new(data_dir.join("medidex.log"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
