/// pyproject.toml loading and `[tool.black]` extraction.
///
/// Black accepts both hyphen and underscore spellings for its option names;
/// both are honored here, with the hyphen form winning when both appear.
use std::fs;
use std::path::Path;

use toml::Value;

use super::ConfigError;

/// File name of the recognized project configuration file.
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// Options read from a `[tool.black]` table. `None` means the key was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PyprojectOptions {
    pub line_length: Option<usize>,
    pub target_versions: Option<Vec<String>>,
    pub skip_string_normalization: Option<bool>,
}

/// Read `path` and extract its `[tool.black]` table.
///
/// A file without a `[tool.black]` table yields the empty options.
///
/// # Errors
///
/// Returns `ConfigError` when the file cannot be read, is not valid TOML,
/// or a recognized key has the wrong type.
pub fn load_pyproject(path: &Path) -> Result<PyprojectOptions, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = text.parse().map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(table) = value.get("tool").and_then(|t| t.get("black")) else {
        return Ok(PyprojectOptions::default());
    };

    let mut opts = PyprojectOptions::default();

    if let Some(v) = lookup(table, "line-length", "line_length") {
        let n = v
            .as_integer()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| bad_value(path, "line-length"))?;
        opts.line_length = Some(n);
    }

    if let Some(v) = lookup(table, "target-version", "target_version") {
        let versions = v
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .map(|item| item.as_str().map(str::to_owned))
                    .collect::<Option<Vec<String>>>()
            })
            .ok_or_else(|| bad_value(path, "target-version"))?
            .ok_or_else(|| bad_value(path, "target-version"))?;
        opts.target_versions = Some(versions);
    }

    if let Some(v) = lookup(table, "skip-string-normalization", "skip_string_normalization") {
        let skip = v
            .as_bool()
            .ok_or_else(|| bad_value(path, "skip-string-normalization"))?;
        opts.skip_string_normalization = Some(skip);
    }

    Ok(opts)
}

fn lookup<'a>(table: &'a Value, hyphen: &str, underscore: &str) -> Option<&'a Value> {
    table.get(hyphen).or_else(|| table.get(underscore))
}

fn bad_value(path: &Path, key: &str) -> ConfigError {
    ConfigError::BadValue {
        path: path.to_path_buf(),
        key: key.to_owned(),
    }
}
