use std::path::PathBuf;

use thiserror::Error;

/// Failures of the batch stages and of the viewer's data load.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Input file is missing or cannot be read.
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input was read but could not be parsed.
    #[error("malformed input in {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MenuError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        MenuError::Malformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
