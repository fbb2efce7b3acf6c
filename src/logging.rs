use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Sends log output to `path`; the terminal belongs to the game screen.
///
/// Filtering defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
