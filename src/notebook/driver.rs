/// The notebook driver: one linear pass per file, writes back only when
/// something changed.
use std::path::{Path, PathBuf};

use crate::config::StyleConfig;
use crate::fmt::Formatter;

use super::document::Notebook;
use super::errors::NotebookError;
use super::transform::transform_cell;

/// Processes notebooks with a fixed formatter, configuration, and mode.
/// All context is supplied at construction; nothing ambient.
pub struct Driver<'f> {
    formatter: &'f dyn Formatter,
    config: StyleConfig,
    check_only: bool,
}

impl<'f> Driver<'f> {
    /// Build a driver for one invocation.
    #[must_use]
    pub fn new(formatter: &'f dyn Formatter, config: StyleConfig, check_only: bool) -> Self {
        Self {
            formatter,
            config,
            check_only,
        }
    }

    /// Process the notebook at `path`. Returns whether any cell changed.
    ///
    /// Cells are transformed in document order, in place; their count and
    /// order never change. The file is rewritten only when at least one
    /// cell changed and the driver is not in check-only mode.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError` on load, write, or formatter infrastructure
    /// failure.
    pub fn process(&self, path: &Path) -> Result<bool, NotebookError> {
        let mut notebook = Notebook::load(path)?;

        let mut changed = 0usize;
        for cell in &mut notebook.cells {
            if transform_cell(cell, self.formatter, &self.config)? {
                changed += 1;
            }
        }

        if changed > 0 && !self.check_only {
            notebook.save(path)?;
        }
        Ok(changed > 0)
    }

    /// Process each path in the order given, invoking `on_changed` as each
    /// changed file completes. Returns the number of changed files.
    ///
    /// # Errors
    ///
    /// The first per-file error aborts the batch.
    pub fn process_many<F>(&self, paths: &[PathBuf], mut on_changed: F) -> Result<usize, NotebookError>
    where
        F: FnMut(&Path),
    {
        let mut count = 0;
        for path in paths {
            if self.process(path)? {
                on_changed(path);
                count += 1;
            }
        }
        Ok(count)
    }
}
