use std::path::PathBuf;

use directories::BaseDirs;

/// SQLite file created in the working directory. Existing catalogs use this
/// exact name, so it doubles as the on-disk compatibility contract.
pub const DB_FILE_NAME: &str = "ebookstore.db";
/// Folder name used beneath the user's home directory for log files.
const DATA_DIR_NAME: &str = ".shelf-track";
const LOG_DIR_NAME: &str = "logs";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings for the binary. There are no flags or config files; the
/// defaults are the configuration and tests build their own instances.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Where rolling log files go. `None` sends logs to stderr instead.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_FILE_NAME),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: default_log_dir(),
        }
    }
}

/// Resolve `~/.shelf-track/logs`, if a home directory exists.
fn default_log_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(DATA_DIR_NAME).join(LOG_DIR_NAME))
}
