/// Errors from the formatter layer.
use thiserror::Error;

/// Infrastructure failures while running the external formatter.
#[derive(Debug, Error)]
pub enum FormatterError {
    /// The formatter executable is not on PATH.
    #[error("formatter executable '{program}' not found on PATH (is black installed?)")]
    NotFound {
        /// The program name that was looked up.
        program: String,
    },

    /// The formatter process could not be spawned or communicated with.
    #[error("failed to run formatter: {0}")]
    Spawn(#[source] std::io::Error),

    /// The formatter exited with an unexpected status.
    #[error("formatter exited with status {status}: {stderr}")]
    Failed {
        /// Raw exit status.
        status: i32,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// The formatter wrote output that is not valid UTF-8.
    #[error("formatter produced non-UTF-8 output")]
    InvalidUtf8,
}
