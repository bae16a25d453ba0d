/// Expand CLI path arguments into concrete notebook files.
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::NotebookError;
use super::document::NOTEBOOK_EXTENSION;

/// Directory name notebook editors use for autosaved copies.
const CHECKPOINT_DIR: &str = ".ipynb_checkpoints";

/// Expand each argument: directories become every `.ipynb` file beneath
/// them (checkpoint copies excluded, results sorted); files pass through
/// as-is, in the order given.
///
/// # Errors
///
/// Returns `NotebookError::Walk` when a directory cannot be traversed.
pub fn expand_paths(args: &[PathBuf]) -> Result<Vec<PathBuf>, NotebookError> {
    let mut paths = Vec::new();
    for arg in args {
        if arg.is_dir() {
            paths.extend(walk_dir(arg)?);
        } else {
            paths.push(arg.clone());
        }
    }
    Ok(paths)
}

fn walk_dir(dir: &Path) -> Result<Vec<PathBuf>, NotebookError> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| NotebookError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == NOTEBOOK_EXTENSION)
            && !is_checkpoint(path)
        {
            found.push(path.to_path_buf());
        }
    }
    found.sort();
    Ok(found)
}

fn is_checkpoint(path: &Path) -> bool {
    path.components()
        .any(|c| c.as_os_str() == CHECKPOINT_DIR)
}
