//! Error adapter for converting ArborError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Decode errors carry their source text, so they are rendered with a label
//! pointing at the line and column the JSON decoder stopped at.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};
use serde_json::error::Category;

use arbor::ArborError;

/// Adapter for a JSON decode error and the text it was raised on.
pub struct DecodeAdapter<'a> {
    err: &'a serde_json::Error,
    src: &'a str,
}

impl<'a> DecodeAdapter<'a> {
    /// Create a new decode adapter.
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }

    /// Returns the byte span of the character the decoder stopped at.
    pub fn span(&self) -> SourceSpan {
        let offset = byte_offset(self.src, self.err.line(), self.err.column());
        let len = self.src[offset..].chars().next().map_or(0, char::len_utf8);
        SourceSpan::new(offset.into(), len)
    }
}

impl fmt::Debug for DecodeAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DecodeAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decode error: {}", self.err)
    }
}

impl std::error::Error for DecodeAdapter<'_> {}

impl MietteDiagnostic for DecodeAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("arbor::decode"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err.classify() {
            Category::Syntax => "the input must be valid JSON",
            Category::Eof => "the input ended before the JSON value was complete",
            Category::Data => {
                "check field names and types; pass --nested for domains with inline sub-domains"
            }
            Category::Io => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`ArborError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a ArborError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArborError::Io(_) => "arbor::io",
            ArborError::Decode { .. } => "arbor::decode",
            ArborError::Encode(_) => "arbor::encode",
            ArborError::Config(_) => "arbor::config",
            ArborError::Integrity(_) => "arbor::integrity",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ArborError::Integrity(_) => Some(Box::new(
                "drop --deny-dangling to lay out orphaned nodes as roots",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A decode error with source location information.
    Decode(DecodeAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Decode(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Decode(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Decode(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Decode(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Decode(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Decode(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Maps a 1-based line and column from the JSON decoder to a byte offset.
///
/// The result is clamped to `src` and lands on a char boundary. Line 0
/// (no position known) maps to the start of the input.
fn byte_offset(src: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }

    let line_start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    let mut offset = (line_start + column.saturating_sub(1)).min(src.len());

    while !src.is_char_boundary(offset) {
        offset -= 1;
    }

    offset
}

/// Convert an [`ArborError`] into a list of reportable errors.
pub fn to_reportables(err: &ArborError) -> Vec<Reportable<'_>> {
    match err {
        ArborError::Decode { err, src } => {
            vec![Reportable::Decode(DecodeAdapter::new(err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use arbor::input::parse_records;

    use super::*;

    #[test]
    fn test_byte_offset() {
        let src = "[\n  {\"a\": 1},\n  oops\n]";

        assert_eq!(byte_offset(src, 0, 0), 0);
        assert_eq!(byte_offset(src, 1, 1), 0);
        assert_eq!(byte_offset(src, 3, 3), 16);
        assert_eq!(byte_offset(src, 99, 99), src.len());
    }

    #[test]
    fn test_byte_offset_respects_char_boundary() {
        let src = "\"é\"";
        let offset = byte_offset(src, 1, 3);
        assert!(src.is_char_boundary(offset));
    }

    #[test]
    fn test_decode_error_has_label() {
        let src = "[\n  {\"uniqueId\": \"one\", \"label\": \"Root\"}\n]";
        let err = parse_records(src).unwrap_err();

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Decode(d) => {
                assert!(d.to_string().starts_with("Decode error"));
                assert_eq!(d.code().unwrap().to_string(), "arbor::decode");

                let labels: Vec<_> = d.labels().unwrap().collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
                assert!(labels[0].offset() > 2, "label should be on line 2");
            }
            Reportable::Error(_) => panic!("Expected Decode"),
        }
    }

    #[test]
    fn test_non_decode_error() {
        let err = ArborError::Integrity("1 node(s) reference a parent".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Integrity error: 1 node(s) reference a parent");
                assert_eq!(e.code().unwrap().to_string(), "arbor::integrity");
                assert!(e.help().is_some());
            }
            Reportable::Decode(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_config_error_code() {
        let err = ArborError::Config("bad".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables[0].code().unwrap().to_string(), "arbor::config");
        assert!(reportables[0].source_code().is_none());
    }
}
