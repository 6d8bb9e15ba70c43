//! Subscriber setup: colored console output plus an append-only log file.

use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. A log file that cannot be opened downgrades to console-only
/// logging instead of failing startup.
pub fn init_logging(log_path: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = fmt::layer().with_target(false);

    match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => {
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .init();
            tracing::debug!(path = %log_path.display(), "Logging initialized");
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .init();
            tracing::warn!(path = %log_path.display(), error = %e, "Could not open log file; logging to console only");
        }
    }
}
