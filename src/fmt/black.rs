/// The `black` subprocess formatter.
///
/// Black reads source from stdin when given `-` and writes the canonical
/// rendering to stdout. Style options travel as command-line flags. An exit
/// status of 123 is Black's "cannot format" report for syntactically
/// invalid input; everything else nonzero is an infrastructure failure.
use std::io::Write;
use std::process::{Command, Stdio};

use super::{FormatOutcome, Formatter, FormatterError};
use crate::config::StyleConfig;

/// Environment variable overriding the formatter executable name.
const PROGRAM_ENV: &str = "NBBLACK_BLACK";

/// Default formatter executable.
const DEFAULT_PROGRAM: &str = "black";

/// Exit status Black uses to report unparseable input.
const CANNOT_FORMAT: i32 = 123;

/// Formats source text by invoking the `black` executable.
#[derive(Debug, Clone)]
pub struct BlackFormatter {
    program: String,
}

impl BlackFormatter {
    /// Construct with the program name from `NBBLACK_BLACK`, or `black`.
    #[must_use]
    pub fn new() -> Self {
        let program =
            std::env::var(PROGRAM_ENV).unwrap_or_else(|_| DEFAULT_PROGRAM.to_owned());
        Self { program }
    }

    fn command(&self, config: &StyleConfig) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--quiet");
        cmd.arg("--line-length").arg(config.line_length.to_string());
        for version in &config.target_versions {
            cmd.arg("--target-version").arg(version);
        }
        if !config.string_normalization {
            cmd.arg("--skip-string-normalization");
        }
        cmd.arg("-");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Default for BlackFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for BlackFormatter {
    fn format(&self, source: &str, config: &StyleConfig) -> Result<FormatOutcome, FormatterError> {
        let mut child = self.command(config).spawn().map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                FormatterError::NotFound {
                    program: self.program.clone(),
                }
            } else {
                FormatterError::Spawn(err)
            }
        })?;

        // stdin is piped above; take() always succeeds. Drop the handle so
        // the child sees EOF before we wait on it.
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(FormatterError::Spawn)?;
        }

        let output = child.wait_with_output().map_err(FormatterError::Spawn)?;

        if output.status.success() {
            let text = String::from_utf8(output.stdout).map_err(|_| FormatterError::InvalidUtf8)?;
            return Ok(FormatOutcome::Formatted(text));
        }

        match output.status.code() {
            Some(CANNOT_FORMAT) => Ok(FormatOutcome::SyntaxInvalid),
            code => Err(FormatterError::Failed {
                status: code.unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_flags_from_config() {
        let formatter = BlackFormatter {
            program: "black".to_owned(),
        };
        let config = StyleConfig {
            line_length: 100,
            target_versions: vec!["py310".to_owned(), "py311".to_owned()],
            string_normalization: false,
        };
        let cmd = formatter.command(&config);
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            [
                "--quiet",
                "--line-length",
                "100",
                "--target-version",
                "py310",
                "--target-version",
                "py311",
                "--skip-string-normalization",
                "-",
            ]
        );
    }

    #[test]
    fn test_command_omits_skip_flag_when_normalizing() {
        let formatter = BlackFormatter {
            program: "black".to_owned(),
        };
        let cmd = formatter.command(&StyleConfig::default());
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, ["--quiet", "--line-length", "88", "-"]);
    }
}
