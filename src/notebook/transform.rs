/// The per-cell transform: decide whether to reformat, and how.
use crate::config::StyleConfig;
use crate::fmt::{FormatOutcome, Formatter, FormatterError};

use super::document::Cell;

/// Reformat one cell in place. Returns whether the cell's text changed.
///
/// Non-code cells and code cells with only whitespace are never touched.
/// A cell the formatter cannot parse is left as-is; only formatter
/// infrastructure failures abort the run.
///
/// Two fixups are applied to the formatter's output before comparison:
/// trailing whitespace is stripped (a trailing newline on the last cell
/// line would show up as a spurious diff), and a trailing `;` from the
/// original is restored because it suppresses output display in notebooks.
///
/// # Errors
///
/// Propagates `FormatterError` from the formatter.
pub fn transform_cell(
    cell: &mut Cell,
    formatter: &dyn Formatter,
    config: &StyleConfig,
) -> Result<bool, FormatterError> {
    let Cell::Code(body) = cell else {
        return Ok(false);
    };

    let original = body.source.joined().into_owned();
    let trimmed = original.trim();
    if trimmed.is_empty() {
        return Ok(false);
    }

    let formatted = match formatter.format(&original, config)? {
        FormatOutcome::SyntaxInvalid => return Ok(false),
        FormatOutcome::Formatted(text) => text,
    };

    let mut updated = formatted.trim_end().to_owned();
    if trimmed.ends_with(';') && !updated.ends_with(';') {
        updated.push(';');
    }

    if updated == original {
        return Ok(false);
    }
    body.source.replace_with(updated);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notebook::document::{CellBody, SourceText};
    use serde_json::Map;

    /// Stub formatter: normalizes `a=b` lines to `a = b`, drops a trailing
    /// statement separator, and appends a trailing newline, the way Black
    /// terminates its output. Input containing `!` is reported as
    /// unparseable.
    struct StubFormatter;

    impl Formatter for StubFormatter {
        fn format(
            &self,
            source: &str,
            _config: &StyleConfig,
        ) -> Result<FormatOutcome, FormatterError> {
            if source.contains('!') {
                return Ok(FormatOutcome::SyntaxInvalid);
            }
            let mut out = String::new();
            for line in source.lines() {
                match line.split_once('=') {
                    Some((lhs, rhs)) => {
                        out.push_str(lhs.trim_end());
                        out.push_str(" = ");
                        out.push_str(rhs.trim_start());
                    }
                    None => out.push_str(line),
                }
                out.push('\n');
            }
            let body = out.trim_end().trim_end_matches(';');
            Ok(FormatOutcome::Formatted(format!("{body}\n")))
        }
    }

    /// Formatter that must never be called.
    struct PanicFormatter;

    impl Formatter for PanicFormatter {
        fn format(
            &self,
            _source: &str,
            _config: &StyleConfig,
        ) -> Result<FormatOutcome, FormatterError> {
            panic!("formatter invoked for a cell that must not be formatted");
        }
    }

    fn code(source: &str) -> Cell {
        Cell::Code(CellBody {
            source: SourceText::Joined(source.to_owned()),
            extra: Map::new(),
        })
    }

    fn source_of(cell: &Cell) -> String {
        let Cell::Code(body) = cell else {
            panic!("expected code cell");
        };
        body.source.joined().into_owned()
    }

    #[test]
    fn test_markdown_is_never_formatted() {
        let mut cell = Cell::Markdown(CellBody {
            source: SourceText::Joined("x=1".to_owned()),
            extra: Map::new(),
        });
        let before = cell.clone();
        let changed = transform_cell(&mut cell, &PanicFormatter, &StyleConfig::default()).unwrap();
        assert!(!changed);
        assert_eq!(cell, before);
    }

    #[test]
    fn test_blank_code_cell_is_skipped() {
        let mut cell = code("   \n\t\n");
        let changed = transform_cell(&mut cell, &PanicFormatter, &StyleConfig::default()).unwrap();
        assert!(!changed);
        assert_eq!(source_of(&cell), "   \n\t\n");
    }

    #[test]
    fn test_reformat_reports_changed() {
        let mut cell = code("x=1\ny   =2");
        let changed = transform_cell(&mut cell, &StubFormatter, &StyleConfig::default()).unwrap();
        assert!(changed);
        assert_eq!(source_of(&cell), "x = 1\ny = 2");
    }

    #[test]
    fn test_already_formatted_reports_unchanged() {
        let mut cell = code("x = 1\ny = 2");
        let changed = transform_cell(&mut cell, &StubFormatter, &StyleConfig::default()).unwrap();
        assert!(!changed);
        assert_eq!(source_of(&cell), "x = 1\ny = 2");
    }

    #[test]
    fn test_trailing_newline_is_stripped() {
        // The stub always emits a trailing newline; the transform must not
        // let that alone count as a change.
        let mut cell = code("plot(x)");
        let changed = transform_cell(&mut cell, &StubFormatter, &StyleConfig::default()).unwrap();
        assert!(!changed);
        assert_eq!(source_of(&cell), "plot(x)");
    }

    #[test]
    fn test_trailing_semicolon_is_restored() {
        let mut cell = code("x=plot(y);");
        let changed = transform_cell(&mut cell, &StubFormatter, &StyleConfig::default()).unwrap();
        assert!(changed);
        assert_eq!(source_of(&cell), "x = plot(y);");
    }

    #[test]
    fn test_semicolon_not_doubled() {
        let mut cell = code("x = plot(y);");
        let changed = transform_cell(&mut cell, &StubFormatter, &StyleConfig::default()).unwrap();
        assert!(!changed);
        assert_eq!(source_of(&cell), "x = plot(y);");
    }

    #[test]
    fn test_syntax_error_leaves_cell_untouched() {
        let mut cell = code("%magic !shell x=1");
        let changed = transform_cell(&mut cell, &StubFormatter, &StyleConfig::default()).unwrap();
        assert!(!changed);
        assert_eq!(source_of(&cell), "%magic !shell x=1");
    }

    #[test]
    fn test_line_list_cell_keeps_line_representation() {
        let mut cell = Cell::Code(CellBody {
            source: SourceText::Lines(vec!["x=1\n".to_owned(), "y=2".to_owned()]),
            extra: Map::new(),
        });
        let changed = transform_cell(&mut cell, &StubFormatter, &StyleConfig::default()).unwrap();
        assert!(changed);
        let Cell::Code(body) = &cell else {
            panic!("expected code cell");
        };
        assert_eq!(
            body.source,
            SourceText::Lines(vec!["x = 1\n".to_owned(), "y = 2".to_owned()])
        );
    }
}
