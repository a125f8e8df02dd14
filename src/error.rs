//! Error type shared by the version scanning and bumping operations.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("File {} does not exist.", .0.display())]
    FileNotFound(PathBuf),

    #[error("No version string found in {}.", .0.display())]
    NoVersionFound(PathBuf),

    #[error("Invalid part '{0}' specified. Use major, minor, or patch.")]
    InvalidPart(String),

    /// A captured digit run does not fit a `u64`, or incrementing it would overflow.
    #[error("Version component out of range: {0}")]
    ComponentOutOfRange(String),

    #[error(transparent)]
    Pattern(#[from] regex::Error),

    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
