//! Byte-offset source spans.

use serde::Serialize;

/// A half-open byte range `[start, end)` into a single source file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Span {
        Span { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Strict interval containment: `other` lies fully inside this span
    /// without touching either edge.
    ///
    /// Expected-error reconciliation matches by textual span, not by tree
    /// ancestry, so this is the single containment predicate for the whole
    /// runner. A diagnostic that starts exactly at the assertion call's own
    /// start belongs to the call itself and is deliberately not matched.
    pub fn strictly_contains(&self, other: Span) -> bool {
        other.start > self.start && other.end < self.end
    }
}
