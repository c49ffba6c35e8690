//! Pipeline orchestration and final aggregation.

use crate::classifier::classify_call_expression;
use crate::dispatch::dispatch;
use crate::handlers::{HandlerContext, HandlerRegistry};
use crate::oracle::{SupportedCodes, TypeOracle};
use crate::reconcile::reconcile_expected_errors;
use crate::table::{AssertionTable, ExpectedError};
use tsd_common::Diagnostic;
use tsd_syntax::{Program, for_each_call_expression};

/// The assertion test runner: discovery, dispatch, reconciliation,
/// aggregation - strictly in sequence over one program snapshot.
pub struct TestRunner<'a> {
    program: &'a Program,
    oracle: &'a dyn TypeOracle,
    registry: HandlerRegistry,
    supported_codes: SupportedCodes,
}

impl<'a> TestRunner<'a> {
    pub fn new(program: &'a Program, oracle: &'a dyn TypeOracle) -> TestRunner<'a> {
        TestRunner {
            program,
            oracle,
            registry: HandlerRegistry::with_defaults(),
            supported_codes: SupportedCodes::tsd_defaults(),
        }
    }

    /// Substitute the handler dispatch table.
    pub fn with_registry(mut self, registry: HandlerRegistry) -> TestRunner<'a> {
        self.registry = registry;
        self
    }

    /// Substitute the expected-error code allow-list.
    pub fn with_supported_codes(mut self, supported_codes: SupportedCodes) -> TestRunner<'a> {
        self.supported_codes = supported_codes;
        self
    }

    /// Run the full pipeline and return the ordered diagnostic list.
    ///
    /// The complete list is always returned even when assertions fail or
    /// are malformed; the runner never aborts early.
    pub fn run(&self) -> Vec<Diagnostic> {
        self.run_with_extras(Vec::new())
    }

    /// Run the pipeline and merge diagnostics from unrelated rule
    /// collaborators into the final ordering.
    pub fn run_with_extras(&self, extras: Vec<Diagnostic>) -> Vec<Diagnostic> {
        // Discovery: one walk builds the whole table.
        let mut table = AssertionTable::new();
        for_each_call_expression(self.program, |file, call| {
            classify_call_expression(self.program, self.oracle, file, call, &mut table);
        });
        tracing::debug!(
            occurrences = table.occurrence_count(),
            expected_error_ranges = table.expected_error_ranges.len(),
            "assertion discovery complete"
        );

        // Relation checks.
        let mut ctx = HandlerContext::new(self.program, self.oracle);
        dispatch(&table, &self.registry, &mut ctx);
        let HandlerContext { diagnostics: handler_diagnostics, expected_errors, .. } = ctx;

        // Reconciliation over both expectation sources.
        let mut expectations: Vec<ExpectedError> = table
            .expected_error_ranges
            .iter()
            .cloned()
            .map(ExpectedError::unconstrained)
            .collect();
        expectations.extend(expected_errors);
        let reconciled =
            reconcile_expected_errors(&expectations, &self.oracle.raw_diagnostics(), &self.supported_codes);

        aggregate([table.classification_diagnostics, handler_diagnostics, reconciled, extras])
    }
}

/// Merge diagnostic streams into one list with a stable order.
///
/// Sorted by file, then line, then column; diagnostics without a position
/// sort before positioned ones in the same file. The sort is stable, so
/// equal keys keep their stream order and identical runs produce identical
/// lists.
pub fn aggregate(parts: impl IntoIterator<Item = Vec<Diagnostic>>) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = parts.into_iter().flatten().collect();
    diagnostics.sort_by(|a, b| {
        (a.file_name.as_str(), a.line.unwrap_or(0), a.column.unwrap_or(0))
            .cmp(&(b.file_name.as_str(), b.line.unwrap_or(0), b.column.unwrap_or(0)))
    });
    diagnostics
}
