/// The notebook document model.
///
/// Only `cells` and each cell's `source` are interpreted; everything else
/// (nbformat version, kernel metadata, outputs, execution counts) is carried
/// through untouched in flattened passthrough maps.
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::NotebookError;

/// File extension of notebook documents.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// A notebook: an ordered sequence of cells plus passthrough metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Cells in document order. Count and order are never altered.
    pub cells: Vec<Cell>,
    /// Document-level fields other than `cells`, preserved as read.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One notebook cell, discriminated on `cell_type` at load time.
///
/// An unrecognized `cell_type` is a load error rather than a silent misread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// Executable code; the only kind ever rewritten.
    Code(CellBody),
    /// Rendered text.
    Markdown(CellBody),
    /// Unrendered text.
    Raw(CellBody),
}

/// The fields of a cell: its source plus everything else as passthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellBody {
    /// The cell's text.
    pub source: SourceText,
    /// Remaining cell fields (metadata, outputs, `execution_count`, id).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Cell source in either of the two nbformat representations: one joined
/// string, or a list of lines each keeping its trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceText {
    /// A single string holding the whole cell.
    Joined(String),
    /// One entry per line, trailing `\n` included on all but maybe the last.
    Lines(Vec<String>),
}

impl SourceText {
    /// The cell text as one string, concatenating lines when needed.
    #[must_use]
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            Self::Joined(text) => Cow::Borrowed(text),
            Self::Lines(lines) => Cow::Owned(lines.concat()),
        }
    }

    /// Replace the text, keeping the representation kind this cell was
    /// read with so an edit does not churn unrelated bytes.
    pub fn replace_with(&mut self, text: String) {
        match self {
            Self::Joined(current) => *current = text,
            Self::Lines(_) => *self = Self::Lines(split_lines(&text)),
        }
    }
}

/// Split text into nbformat-style lines, each keeping its trailing `\n`.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(i) = rest.find('\n') {
        lines.push(rest[..=i].to_owned());
        rest = &rest[i + 1..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_owned());
    }
    lines
}

impl Notebook {
    /// Load and validate the notebook at `path`.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::Read` when the file cannot be read and
    /// `NotebookError::Load` when it is not a valid notebook document.
    pub fn load(path: &Path) -> Result<Self, NotebookError> {
        let text = fs::read_to_string(path).map_err(|source| NotebookError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| NotebookError::Load {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the notebook back to `path`, pretty-printed with a trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns `NotebookError::Serialize` or `NotebookError::Write`.
    pub fn save(&self, path: &Path) -> Result<(), NotebookError> {
        let mut text =
            serde_json::to_string_pretty(self).map_err(|source| NotebookError::Serialize {
                path: path.to_path_buf(),
                source,
            })?;
        text.push('\n');
        fs::write(path, text).map_err(|source| NotebookError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_source_representations() {
        let json = r#"{
            "cells": [
                {"cell_type": "code", "source": "x = 1\n", "metadata": {}},
                {"cell_type": "code", "source": ["x = 1\n", "y = 2"], "metadata": {}}
            ],
            "nbformat": 4,
            "nbformat_minor": 5
        }"#;
        let nb: Notebook = serde_json::from_str(json).unwrap();
        assert_eq!(nb.cells.len(), 2);
        let Cell::Code(first) = &nb.cells[0] else {
            panic!("expected code cell");
        };
        let Cell::Code(second) = &nb.cells[1] else {
            panic!("expected code cell");
        };
        assert_eq!(first.source.joined(), "x = 1\n");
        assert_eq!(second.source.joined(), "x = 1\ny = 2");
    }

    #[test]
    fn test_unknown_cell_type_is_a_parse_error() {
        let json = r#"{"cells": [{"cell_type": "widget", "source": ""}], "nbformat": 4}"#;
        assert!(serde_json::from_str::<Notebook>(json).is_err());
    }

    #[test]
    fn test_passthrough_fields_survive_round_trip() {
        let json = r#"{
            "cells": [
                {
                    "cell_type": "code",
                    "source": "x = 1",
                    "execution_count": 7,
                    "outputs": [{"output_type": "stream", "text": "hi"}],
                    "metadata": {"collapsed": true}
                }
            ],
            "metadata": {"kernelspec": {"name": "python3"}},
            "nbformat": 4,
            "nbformat_minor": 5
        }"#;
        let nb: Notebook = serde_json::from_str(json).unwrap();
        let out: serde_json::Value = serde_json::to_value(&nb).unwrap();
        let original: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(out, original);
    }

    #[test]
    fn test_replace_with_keeps_representation() {
        let mut joined = SourceText::Joined("x=1".to_owned());
        joined.replace_with("x = 1".to_owned());
        assert_eq!(joined, SourceText::Joined("x = 1".to_owned()));

        let mut lines = SourceText::Lines(vec!["x=1\n".to_owned(), "y=2".to_owned()]);
        lines.replace_with("x = 1\ny = 2".to_owned());
        assert_eq!(
            lines,
            SourceText::Lines(vec!["x = 1\n".to_owned(), "y = 2".to_owned()])
        );
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(""), Vec::<String>::new());
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n"), vec!["a\n"]);
        assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a\n", "\n", "b\n"]);
    }
}
