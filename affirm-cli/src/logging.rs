use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::path::Path;

const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts file logging under `{data_dir}/logs`, keeping the terminal clean.
///
/// The returned handle must stay alive for the process lifetime; dropping it
/// flushes and stops the logger.
pub fn init(data_dir: &Path) -> Result<LoggerHandle> {
    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log dir {}", log_dir.display()))?;

    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().directory(&log_dir).basename("affirm"))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
        .context("starting logger")?;
    Ok(handle)
}
