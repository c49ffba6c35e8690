//! Line/column lookup for byte offsets.

use crate::span::Span;
use serde::Serialize;

/// A zero-based line/character pair, as reported by the line map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based UTF-8 byte column within the line.
    pub character: u32,
}

/// Precomputed line-start table for one source file.
///
/// Built once per file from its text; offset-to-position queries are a
/// binary search over the start table.
#[derive(Clone, Debug)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn new(text: &str) -> LineMap {
        let mut line_starts = vec![0u32];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        LineMap { line_starts }
    }

    /// Map a byte offset to its zero-based line/character position.
    pub fn position(&self, offset: u32) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position {
            line: line as u32,
            character: offset - self.line_starts[line],
        }
    }
}

/// A resolved source location: file, byte span, and the human-facing
/// line/column of the span start.
///
/// Line numbers are 1-based and columns 0-based, matching the convention
/// of the diagnostics this runner emits. Derived once per node; immutable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub file_name: String,
    pub start: u32,
    pub end: u32,
    /// 1-based line of `start`.
    pub line: u32,
    /// 0-based column of `start`.
    pub column: u32,
}

impl SourceLocation {
    pub fn from_span(file_name: &str, line_map: &LineMap, span: Span) -> SourceLocation {
        let position = line_map.position(span.start);
        SourceLocation {
            file_name: file_name.to_string(),
            start: span.start,
            end: span.end,
            line: position.line + 1,
            column: position.character,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}
