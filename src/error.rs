use std::io;

use thiserror::Error;

/// Authoring defects found when a level is parsed strictly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("level {level} has no player marker")]
    MissingPlayer { level: usize },
    #[error("level {level} has {found} player markers, expected one")]
    MultiplePlayers { level: usize, found: usize },
    #[error("level {level} has no crates")]
    NoCrates { level: usize },
    #[error("level {level} has {crates} crates but {targets} targets")]
    CrateTargetMismatch {
        level: usize,
        crates: usize,
        targets: usize,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("could not serialize snapshot: {0}")]
    Export(#[from] serde_json::Error),
    #[error("could not start logging: {0}")]
    Logging(String),
    #[error("{failed} of {total} levels failed validation")]
    InvalidCatalog { failed: usize, total: usize },
}
