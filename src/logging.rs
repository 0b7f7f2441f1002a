// src/logging.rs

use std::path::Path;

use flexi_logger::{FileSpec, Logger, LoggerHandle};

use crate::errors::{ParleyError, ParleyResult};

/// Starts file-backed logging in the given directory. The terminal belongs
/// to the UI, so nothing is ever written to stdout or stderr.
///
/// The returned handle must stay alive for the duration of the program.
pub fn init(dir: &Path) -> ParleyResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")
        .map_err(|e| ParleyError::logging_error(format!("invalid log spec: {e}")))?
        .log_to_file(FileSpec::default().directory(dir).basename("parley"))
        .start()
        .map_err(|e| ParleyError::logging_error(format!("failed to start logger: {e}")))?;
    Ok(handle)
}
