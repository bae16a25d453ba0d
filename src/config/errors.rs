/// Errors from the configuration layer.
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or parsing a project configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The pyproject.toml exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The pyproject.toml is not valid TOML.
    #[error("invalid TOML in '{}': {source}", path.display())]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },

    /// A `[tool.black]` option has the wrong type.
    #[error("invalid value for '{key}' in '{}'", path.display())]
    BadValue {
        /// Path of the configuration file.
        path: PathBuf,
        /// The offending option key.
        key: String,
    },
}
