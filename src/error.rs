use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot create directory {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),
}

pub type Result<T> = std::result::Result<T, BadgeError>;
