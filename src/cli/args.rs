/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;

use crate::config::CliOverrides;

/// nbblack — apply the Black formatter to Jupyter notebook code cells.
#[derive(Debug, Parser)]
#[command(
    name = "nbblack",
    about = "Apply the Black code formatter to code cells in Jupyter notebooks",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Notebook files or directories. Directories are searched recursively
    /// for .ipynb files, skipping checkpoint directories.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Report which notebooks would change without writing anything.
    /// Exit status is the number of such notebooks.
    #[arg(long)]
    pub check: bool,

    /// Maximum line length. Overrides pyproject.toml.
    #[arg(long, value_name = "N")]
    pub line_length: Option<usize>,

    /// Python version to target (e.g. py310). Repeatable.
    #[arg(long = "target-version", value_name = "VERSION")]
    pub target_version: Vec<String>,

    /// Don't normalize string quotes or prefixes.
    #[arg(long)]
    pub skip_string_normalization: bool,

    /// Print per-stage timing to stderr for debugging.
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The style options given on the command line, absent values omitted
    /// so pyproject.toml values still apply.
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            line_length: self.line_length,
            target_versions: if self.target_version.is_empty() {
                None
            } else {
                Some(self.target_version.clone())
            },
            skip_string_normalization: self.skip_string_normalization.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_overrides_empty() {
        let cli = Cli::parse_from(["nbblack", "nb.ipynb"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.line_length, None);
        assert_eq!(overrides.target_versions, None);
        assert_eq!(overrides.skip_string_normalization, None);
        assert!(!cli.check);
    }

    #[test]
    fn test_flags_populate_overrides() {
        let cli = Cli::parse_from([
            "nbblack",
            "--check",
            "--line-length",
            "100",
            "--target-version",
            "py310",
            "--target-version",
            "py311",
            "--skip-string-normalization",
            "nb.ipynb",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.line_length, Some(100));
        assert_eq!(
            overrides.target_versions,
            Some(vec!["py310".to_owned(), "py311".to_owned()])
        );
        assert_eq!(overrides.skip_string_normalization, Some(true));
        assert!(cli.check);
    }
}
