//! Logging bootstrap. Log output never goes to stdout so it cannot interleave
//! with the menu: rolling files when a log directory is configured, stderr
//! otherwise.

use std::path::Path;

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode,
};
use log::info;

use crate::config::Config;

const LOG_FILE_BASENAME: &str = "shelf-track";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start the global logger. The returned handle must be kept alive for the
/// rest of the process, otherwise buffered lines are lost.
pub fn init_logging(config: &Config) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_str(&config.log_level)?;
    let handle = match config.log_dir.as_deref() {
        Some(dir) => start_file_logger(logger, dir)?,
        None => logger.log_to_stderr().start()?,
    };

    info!(
        "event=app_start module=logging status=ok platform={} version={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

/// Rolling file output; flexi_logger creates `dir` when it is missing.
fn start_file_logger(logger: Logger, dir: &Path) -> Result<LoggerHandle, FlexiLoggerError> {
    logger
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
}
