use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Installs the global tracing subscriber.
///
/// Logs go to `config.file` because the UI owns the terminal. Without a file
/// no subscriber is installed and events are discarded. `RUST_LOG` takes
/// precedence over `config.level`.
///
/// Returns `true` if a subscriber was installed by this call.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<bool> {
    let Some(path) = config.file.as_deref() else {
        return Ok(false);
    };
    let file = open_log_file(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(path = %path.display(), level = %config.level, "Logging initialized");
    }
    Ok(installed)
}

fn open_log_file(path: &Path) -> io::Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
