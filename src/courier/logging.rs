//! Rolling file logs under the app data directory.
//!
//! Log lines carry command keywords and counts only, never the text of what
//! the user typed, since arguments hold client names, phones and addresses.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::path::Path;

const LOG_FILE_BASENAME: &str = "courier";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts file logging under `log_dir` at `info`, or `debug` when verbose.
///
/// The returned handle has to stay alive for the rest of the process;
/// dropping it stops the flusher. Errors come back as strings so the shell
/// can print a notice and keep running without logs.
pub fn init(log_dir: &Path, verbose: bool) -> Result<LoggerHandle, String> {
    let level = if verbose { "debug" } else { "info" };

    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "could not create log directory {}: {}",
            log_dir.display(),
            err
        )
    })?;

    Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level {}: {}", level, err))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("could not start logging: {}", err))
}
