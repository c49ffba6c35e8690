//! Error reconciliation.
//!
//! Correlates "this expression must fail to type-check" expectations with
//! the raw diagnostic stream from the oracle's whole-program check.
//! Matching is purely interval-based (strict span containment), never
//! structural: nested or overlapping expected ranges may accept the same
//! raw diagnostic - that is accepted behavior, not deduplicated.

use crate::messages;
use crate::oracle::SupportedCodes;
use crate::table::ExpectedError;
use tsd_common::{Diagnostic, RawDiagnostic, format_message};

/// Reconcile expected-error ranges against the raw diagnostic stream.
///
/// Per expected range:
/// - no contained diagnostic (or none satisfying the range's constraint):
///   "Expected an error, but found none." at the range start;
/// - contained diagnostics with an allow-listed code are consumed and do
///   not appear in the output;
/// - contained diagnostics with any other code pass through *and* gain an
///   "unsupported code" notice at the same location.
///
/// Raw diagnostics outside every range pass through unchanged.
pub fn reconcile_expected_errors(
    expectations: &[ExpectedError],
    raw_diagnostics: &[RawDiagnostic],
    supported_codes: &SupportedCodes,
) -> Vec<Diagnostic> {
    let mut suppressed = vec![false; raw_diagnostics.len()];
    let mut unsupported = vec![false; raw_diagnostics.len()];
    let mut output = Vec::new();

    for expectation in expectations {
        let contained: Vec<usize> = raw_diagnostics
            .iter()
            .enumerate()
            .filter(|(_, diagnostic)| is_contained(expectation, diagnostic))
            .map(|(index, _)| index)
            .collect();

        if contained.is_empty() {
            output.push(expectation_unmet(expectation));
            continue;
        }

        for &index in &contained {
            if supported_codes.contains(raw_diagnostics[index].code) {
                suppressed[index] = true;
            } else {
                unsupported[index] = true;
            }
        }

        // A constraint that no contained diagnostic satisfies degrades to
        // the "found none" outcome, even though a generic compiler
        // diagnostic physically existed in range.
        if let Some(constraint) = &expectation.constraint
            && !contained.iter().any(|&index| constraint.matches(&raw_diagnostics[index]))
        {
            output.push(expectation_unmet(expectation));
        }
    }

    for (index, diagnostic) in raw_diagnostics.iter().enumerate() {
        if suppressed[index] {
            continue;
        }
        output.push(convert(diagnostic));
        if unsupported[index] {
            output.push(
                Diagnostic::error(
                    &diagnostic.location.file_name,
                    format_message(messages::UNSUPPORTED_ERROR_CODE, &[&diagnostic.code.to_string()]),
                )
                .at(&diagnostic.location),
            );
        }
    }

    output
}

/// Interval containment: same file, diagnostic span strictly inside the
/// expected range.
fn is_contained(expectation: &ExpectedError, diagnostic: &RawDiagnostic) -> bool {
    diagnostic.location.file_name == expectation.range.file_name
        && expectation.range.span().strictly_contains(diagnostic.location.span())
}

fn expectation_unmet(expectation: &ExpectedError) -> Diagnostic {
    Diagnostic::error(&expectation.range.file_name, messages::EXPECTED_ERROR_NOT_FOUND).at(&expectation.range)
}

fn convert(diagnostic: &RawDiagnostic) -> Diagnostic {
    Diagnostic::error(&diagnostic.location.file_name, &diagnostic.message).at(&diagnostic.location)
}
