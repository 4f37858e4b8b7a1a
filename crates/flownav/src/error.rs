//! Error handling for the flownav binary.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for flownav operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read an input file.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The configuration failed to decode or validate.
    #[error("{}", .0.pretty())]
    Config(#[from] flownav_config::Error),
    /// Output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
    /// `--activate` pointed past the visible buttons.
    #[error("No visible button {index}; the row has {count}")]
    NoSuchButton {
        /// 1-based index requested.
        index: usize,
        /// Number of visible buttons.
        count: usize,
    },
}
