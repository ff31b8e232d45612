//! Logging and tracing initialization.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber with the given configuration.
///
/// When `config.file` is set, log output is appended to that file instead
/// of stderr. A file that cannot be opened falls back to stderr.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_writer = config.file.as_deref().and_then(open_log_file);

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = match (config.json, file_writer)
    {
        (true, Some(writer)) => Box::new(
            fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .json()
                .with_writer(writer)
                .finish(),
        ),
        (true, None) => Box::new(
            fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .json()
                .finish(),
        ),
        (false, Some(writer)) => Box::new(
            fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
                .finish(),
        ),
        (false, None) => Box::new(
            fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        ),
    };

    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

/// Open a log file for appending, creating parent directories as needed.
fn open_log_file(path: &Path) -> Option<Arc<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
            eprintln!("Cannot create log directory {}", parent.display());
            return None;
        }
    }

    match File::options().create(true).append(true).open(path) {
        Ok(file) => Some(Arc::new(file)),
        Err(e) => {
            eprintln!("Cannot open log file {}: {e}", path.display());
            None
        }
    }
}
