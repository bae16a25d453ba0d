/// Errors from the notebook domain layer.
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::fmt::FormatterError;

/// Errors that abort processing. Per-cell syntax errors never surface here;
/// they are swallowed by the cell transform.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// The notebook file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// Path of the notebook.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not a valid notebook document.
    #[error("'{}' is not a valid notebook: {source}", path.display())]
    Load {
        /// Path of the notebook.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The rewritten notebook could not be serialized.
    #[error("failed to serialize '{}': {source}", path.display())]
    Serialize {
        /// Path of the notebook.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The rewritten notebook could not be written back.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// Path of the notebook.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A directory argument could not be walked.
    #[error("failed to walk '{}': {source}", path.display())]
    Walk {
        /// The directory argument.
        path: PathBuf,
        /// Underlying walkdir error.
        source: walkdir::Error,
    },

    /// Project configuration failure.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Formatter infrastructure failure.
    #[error(transparent)]
    Formatter(#[from] FormatterError),
}

/// Exit code mapping for `NotebookError` variants.
impl NotebookError {
    /// Return the CLI exit code for this error.
    ///
    /// File and configuration failures exit 2; formatter infrastructure
    /// failures exit 3. Codes 1..=100 are reserved for the check-mode
    /// changed-file count.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. }
            | Self::Load { .. }
            | Self::Serialize { .. }
            | Self::Write { .. }
            | Self::Walk { .. }
            | Self::Config(_) => 2,
            Self::Formatter(_) => 3,
        }
    }
}
