/// Style configuration: defaults, pyproject.toml discovery, CLI overrides.
pub mod errors;
pub mod pyproject;
pub mod root;

pub use errors::ConfigError;
pub use pyproject::PyprojectOptions;
pub use root::find_project_root;

use std::path::PathBuf;

/// Black's default maximum line length.
pub const DEFAULT_LINE_LENGTH: usize = 88;

/// Resolved formatter options, immutable for the whole invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Maximum line length.
    pub line_length: usize,
    /// Target Python versions (e.g. `py310`); empty means auto-detect.
    pub target_versions: Vec<String>,
    /// Whether string quotes and prefixes are normalized.
    pub string_normalization: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_length: DEFAULT_LINE_LENGTH,
            target_versions: Vec::new(),
            string_normalization: true,
        }
    }
}

/// Options supplied on the command line. `None` means "not given",
/// so file-supplied values still apply.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub line_length: Option<usize>,
    pub target_versions: Option<Vec<String>>,
    pub skip_string_normalization: Option<bool>,
}

impl StyleConfig {
    fn apply_file(&mut self, opts: &PyprojectOptions) {
        if let Some(n) = opts.line_length {
            self.line_length = n;
        }
        if let Some(versions) = &opts.target_versions {
            self.target_versions = versions.clone();
        }
        if let Some(skip) = opts.skip_string_normalization {
            self.string_normalization = !skip;
        }
    }

    fn apply_overrides(&mut self, overrides: &CliOverrides) {
        if let Some(n) = overrides.line_length {
            self.line_length = n;
        }
        if let Some(versions) = &overrides.target_versions {
            self.target_versions = versions.clone();
        }
        if let Some(skip) = overrides.skip_string_normalization {
            self.string_normalization = !skip;
        }
    }
}

/// Resolve the style configuration for one invocation.
///
/// Precedence: CLI overrides > `[tool.black]` in the project root's
/// pyproject.toml > built-in defaults.
///
/// # Errors
///
/// Returns `ConfigError` when a pyproject.toml exists but cannot be read
/// or parsed.
pub fn resolve_config(
    paths: &[PathBuf],
    overrides: &CliOverrides,
) -> Result<StyleConfig, ConfigError> {
    let mut config = StyleConfig::default();
    if let Some(project_root) = find_project_root(paths) {
        let candidate = project_root.join(pyproject::PYPROJECT_FILE);
        if candidate.is_file() {
            let opts = pyproject::load_pyproject(&candidate)?;
            config.apply_file(&opts);
        }
    }
    config.apply_overrides(overrides);
    Ok(config)
}
