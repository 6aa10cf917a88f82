//! Process-wide tracing setup.
//!
//! One log file per process, named after the start time, plus a stderr sink.
//! The filter defaults to `info` and honours `RUST_LOG`.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

/// File name used for a run started at `started`.
pub fn log_file_name(started: DateTime<Local>) -> String {
    format!("{}.log", started.format("%m_%d_%Y_%H_%M_%S"))
}

/// Initialise logging into `log_dir`. Later calls return the first path.
pub fn init(log_dir: impl AsRef<Path>) -> io::Result<PathBuf> {
    if let Some(path) = LOG_FILE.get() {
        return Ok(path.clone());
    }

    let dir = log_dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let path = dir.join(log_file_name(Local::now()));
    let file = File::create(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_line_number(true);
    let stderr_layer = fmt::layer().with_writer(io::stderr);

    // A subscriber may already be installed (tests, embedding binaries).
    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("logging already initialised: {e}");
    }

    let chosen = LOG_FILE.get_or_init(|| path).clone();
    tracing::info!(path = %chosen.display(), "logging initialised");
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_file_name_format() {
        let started = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(log_file_name(started), "03_07_2024_09_05_01.log");
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = init(dir.path()).unwrap();
        let second = init(dir.path().join("elsewhere")).unwrap();
        assert_eq!(first, second);
        assert!(first.exists());
    }
}
