/// Formatter boundary: the external code formatter behind a trait.
pub mod black;
pub mod errors;

pub use black::BlackFormatter;
pub use errors::FormatterError;

use crate::config::StyleConfig;

/// Outcome of one formatting attempt.
///
/// Invalid syntax is an expected outcome, not an error: the caller leaves
/// the cell as-is and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Canonicalized source text.
    Formatted(String),
    /// The source could not be parsed; the input is left untouched.
    SyntaxInvalid,
}

/// A source-text formatter.
///
/// Implemented by [`BlackFormatter`] in production and by stubs in tests.
pub trait Formatter {
    /// Format `source` under `config`.
    ///
    /// # Errors
    ///
    /// Returns `FormatterError` only for infrastructure failures (formatter
    /// missing, crashed, undecodable output) — never for invalid input,
    /// which is reported as [`FormatOutcome::SyntaxInvalid`].
    fn format(&self, source: &str, config: &StyleConfig) -> Result<FormatOutcome, FormatterError>;
}
