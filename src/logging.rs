//! File logging setup.
//!
//! The TUI owns the terminal, so everything goes to a log file under the
//! user's local data directory instead of stdout.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

pub fn get_log_directory() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("movieshelf").join("logs"))
}

pub fn get_log_file_path() -> Option<PathBuf> {
    get_log_directory().map(|d| d.join("movieshelf.log"))
}

/// Initializes the file logger and returns the log file path on success.
/// Logging is best effort: any failure here leaves the app running without
/// a logger.
pub fn init_logging() -> Option<PathBuf> {
    let log_dir = get_log_directory()?;

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: could not create log directory: {e}");
        return None;
    }

    let log_path = log_dir.join("movieshelf.log");

    // Rotate once the file gets large
    if let Ok(metadata) = fs::metadata(&log_path) {
        if metadata.len() > MAX_LOG_BYTES {
            let backup = log_dir.join("movieshelf.log.old");
            let _ = fs::rename(&log_path, &backup);
        }
    }

    let log_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: could not open log file: {e}");
            return None;
        }
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .build();

    if WriteLogger::init(LevelFilter::Debug, config, log_file).is_err() {
        eprintln!("Warning: logger already initialized");
    }

    log::info!("=== movieshelf session started ===");

    Some(log_path)
}
