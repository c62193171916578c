//! File logging
//!
//! The terminal belongs to the TUI while it runs, so records are written to a
//! log file in the config directory rather than stderr.

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "DEPT_SCHEDULE_LOG";

pub fn log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join("dept-schedule.log"))
}

/// Start logging to the log file.
///
/// Returns the file path, or `None` when the file could not be opened, in
/// which case logging stays disabled.
pub fn init(config: &Config) -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let env = env_logger::Env::new().filter_or(LOG_ENV, config.log_level.as_str());
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .ok()?;

    Some(path)
}
