//! The assertion table: everything discovery produces.

use crate::kinds::AssertionKind;
use indexmap::IndexMap;
use regex::Regex;
use tsd_common::{Diagnostic, RawDiagnostic, SourceLocation};
use tsd_syntax::{FileId, NodeIndex};

/// One syntactic use of an assertion function or chain.
///
/// For simple kinds `operand_a` is the assertion call itself. For fluent
/// kinds `operand_a` is the `assertType(...)` root call and `operand_b`
/// the terminal method call; each carries either a generic type argument
/// or a value argument, never both.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AssertionOccurrence {
    pub kind: AssertionKind,
    pub file: FileId,
    /// The node handler diagnostics are positioned at (the full assertion
    /// expression).
    pub primary: NodeIndex,
    pub operand_a: NodeIndex,
    pub operand_b: Option<NodeIndex>,
}

/// Content constraint attached to a `toThrowError` expectation.
#[derive(Clone, Debug)]
pub enum ErrorConstraint {
    /// The diagnostic message must contain this substring.
    MessageIncludes(String),
    /// The diagnostic code must match exactly.
    Code(u32),
    /// The diagnostic message must match this pattern.
    Pattern(Regex),
}

impl ErrorConstraint {
    pub fn matches(&self, diagnostic: &RawDiagnostic) -> bool {
        match self {
            ErrorConstraint::MessageIncludes(substring) => diagnostic.message.contains(substring),
            ErrorConstraint::Code(code) => diagnostic.code == *code,
            ErrorConstraint::Pattern(pattern) => pattern.is_match(&diagnostic.message),
        }
    }
}

/// An "this range must contain a type error" expectation, from either
/// `expectError(...)` or `assertType(...).toThrowError(...)`.
#[derive(Clone, Debug)]
pub struct ExpectedError {
    pub range: SourceLocation,
    pub constraint: Option<ErrorConstraint>,
}

impl ExpectedError {
    pub fn unconstrained(range: SourceLocation) -> ExpectedError {
        ExpectedError { range, constraint: None }
    }
}

/// Ordered multimap of everything the discovery pass found.
///
/// Built once per program by the classifier, then drained by dispatch and
/// reconciliation; never mutated afterwards. Kind order is first-seen
/// order, which keeps the whole run deterministic.
#[derive(Default)]
pub struct AssertionTable {
    pub occurrences: IndexMap<AssertionKind, Vec<AssertionOccurrence>>,
    pub classification_diagnostics: Vec<Diagnostic>,
    pub expected_error_ranges: Vec<SourceLocation>,
}

impl AssertionTable {
    pub fn new() -> AssertionTable {
        AssertionTable::default()
    }

    /// Register an occurrence under its kind. An occurrence is classified
    /// exactly once; the classifier never calls this twice for one node.
    pub fn register(&mut self, occurrence: AssertionOccurrence) {
        self.occurrences.entry(occurrence.kind).or_default().push(occurrence);
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.classification_diagnostics.push(diagnostic);
    }

    pub fn push_expected_error_range(&mut self, range: SourceLocation) {
        self.expected_error_ranges.push(range);
    }

    pub fn occurrence_count(&self) -> usize {
        self.occurrences.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsd_common::{LineMap, SourceLocation, Span};

    fn raw(code: u32, message: &str) -> RawDiagnostic {
        let map = LineMap::new("x");
        RawDiagnostic {
            location: SourceLocation::from_span("index.test-d.ts", &map, Span::new(0, 1)),
            code,
            message: message.to_string(),
        }
    }

    #[test]
    fn constraints_match_message_code_and_pattern() {
        let diagnostic = raw(2322, "Type 'string' is not assignable to type 'number'.");
        assert!(ErrorConstraint::MessageIncludes("not assignable".into()).matches(&diagnostic));
        assert!(!ErrorConstraint::MessageIncludes("subtype".into()).matches(&diagnostic));
        assert!(ErrorConstraint::Code(2322).matches(&diagnostic));
        assert!(!ErrorConstraint::Code(2345).matches(&diagnostic));
        let pattern = Regex::new("'(string|number)'").expect("valid pattern");
        assert!(ErrorConstraint::Pattern(pattern).matches(&diagnostic));
    }

    #[test]
    fn register_groups_by_kind_in_first_seen_order() {
        let mut table = AssertionTable::new();
        let occurrence = |kind| AssertionOccurrence {
            kind,
            file: FileId(0),
            primary: NodeIndex(0),
            operand_a: NodeIndex(0),
            operand_b: None,
        };
        table.register(occurrence(AssertionKind::PrintType));
        table.register(occurrence(AssertionKind::TypeIdentical));
        table.register(occurrence(AssertionKind::PrintType));

        let kinds: Vec<_> = table.occurrences.keys().copied().collect();
        assert_eq!(kinds, vec![AssertionKind::PrintType, AssertionKind::TypeIdentical]);
        assert_eq!(table.occurrence_count(), 3);
        assert_eq!(table.occurrences[&AssertionKind::PrintType].len(), 2);
    }
}
