//! Error types for source-document loading

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Errors that can occur while loading the source document
///
/// Malformed markup is the only fallible boundary of the crate's core:
/// once a [`SourceDocument`](crate::SourceDocument) exists, every map
/// operation degrades instead of failing.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source file could not be read
    #[error("failed to read source document: {0}")]
    Io(#[from] std::io::Error),

    /// The source markup is not well-formed XML
    #[error("malformed source markup: {0}")]
    Markup(#[from] roxmltree::Error),
}

impl SourceError {
    /// Format the error with source context using ariadne
    ///
    /// Markup errors point at the offending position in `source`; I/O
    /// errors carry no position and fall back to the plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            SourceError::Io(_) => self.to_string(),
            SourceError::Markup(err) => {
                let pos = err.pos();
                let offset = char_offset(source, pos.row, pos.col);
                let span = offset..(offset + 1).min(source.chars().count());

                let mut buf = Vec::new();
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message("malformed source markup")
                    .with_label(
                        Label::new((filename, span))
                            .with_message(err.to_string())
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
                String::from_utf8(buf).unwrap()
            }
        }
    }
}

/// Translate a 1-based row/column text position into a character offset
fn char_offset(source: &str, row: u32, col: u32) -> usize {
    let mut offset = 0;
    for (index, line) in source.split_inclusive('\n').enumerate() {
        if index as u32 + 1 == row {
            let line_chars = line.chars().count();
            return offset + (col.saturating_sub(1) as usize).min(line_chars);
        }
        offset += line.chars().count();
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_offset_first_line() {
        assert_eq!(char_offset("<svg>", 1, 1), 0);
        assert_eq!(char_offset("<svg>", 1, 4), 3);
    }

    #[test]
    fn test_char_offset_later_line() {
        let source = "<svg>\n  <path/>\n</svg>";
        // row 2 starts after the six characters of "<svg>\n"
        assert_eq!(char_offset(source, 2, 1), 6);
        assert_eq!(char_offset(source, 2, 3), 8);
    }

    #[test]
    fn test_char_offset_clamps_past_end() {
        assert_eq!(char_offset("<svg>", 1, 99), 5);
        assert_eq!(char_offset("<svg>", 9, 1), 5);
    }

    #[test]
    fn test_markup_error_message() {
        let err = roxmltree::Document::parse("<svg").unwrap_err();
        let err = SourceError::from(err);
        assert!(err.to_string().starts_with("malformed source markup"));
    }
}
