/// Project-root discovery, following Black's rule: start at the nearest
/// common ancestor of all inputs and walk upward to the first directory
/// containing `pyproject.toml`, `.git`, or `.hg`.
use std::path::{Path, PathBuf};

use super::pyproject::PYPROJECT_FILE;

/// Find the project root for a set of input paths.
///
/// Returns `None` only when `paths` is empty or no path can be made
/// absolute; otherwise falls back to the filesystem root.
#[must_use]
pub fn find_project_root(paths: &[PathBuf]) -> Option<PathBuf> {
    let mut common: Option<PathBuf> = None;
    for path in paths {
        let abs = std::path::absolute(path).ok()?;
        let dir = if abs.is_dir() {
            abs
        } else {
            abs.parent()?.to_path_buf()
        };
        common = Some(match common {
            None => dir,
            Some(current) => common_ancestor(&current, &dir),
        });
    }
    let base = common?;

    for dir in base.ancestors() {
        if dir.join(PYPROJECT_FILE).is_file()
            || dir.join(".git").exists()
            || dir.join(".hg").is_dir()
        {
            return Some(dir.to_path_buf());
        }
    }
    base.ancestors().last().map(Path::to_path_buf)
}

fn common_ancestor(a: &Path, b: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for (ca, cb) in a.components().zip(b.components()) {
        if ca != cb {
            break;
        }
        out.push(ca);
    }
    out
}
