//! Error types for the btadapters command line tool

use btadapters::{EnumerationError, Platform};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Enumeration failed: {0}")]
    Enumeration(#[from] EnumerationError),

    #[error("Adapters on {0} are not enumerated through HCI raw sockets")]
    UnsupportedPlatform(Platform),
}

pub type Result<T> = std::result::Result<T, CliError>;
