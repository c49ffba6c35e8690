//! Identity checks: `expectType`/`expectNotType` and
//! `assertType(...).identicalTo(...)` (plus the negated chain).
//!
//! Identity requires bidirectional assignability *and* the oracle's
//! identity relation. The wide/short wording distinguishes which direction
//! of assignability failed; the negated variants flip the polarity of the
//! single identity check and make no wide/short distinction.

use crate::handlers::HandlerContext;
use crate::messages;
use crate::operands::{operand_type, resolve_operand, simple_operands};
use crate::oracle::TypeId;
use crate::table::AssertionOccurrence;
use tsd_common::{Diagnostic, format_message};
use tsd_syntax::{FileId, NodeIndex, NodeRef};

/// Resolve both fluent operands. Each slot is validated independently, so
/// two misused slots produce two diagnostics; any misuse skips the check.
fn fluent_types(ctx: &mut HandlerContext<'_>, occurrence: &AssertionOccurrence) -> Option<(TypeId, TypeId)> {
    let operand_b = occurrence.operand_b?;
    let a = resolve_operand(ctx, occurrence.file, occurrence.operand_a);
    let b = resolve_operand(ctx, occurrence.file, operand_b);
    let (a, b) = (a?, b?);
    Some((
        operand_type(ctx, occurrence.file, a),
        operand_type(ctx, occurrence.file, b),
    ))
}

/// Run the three-branch identity check and report at `primary`.
/// `actual` is the asserted expression's type, `expected` the declared one.
fn check_identity(
    ctx: &mut HandlerContext<'_>,
    file: FileId,
    primary: NodeIndex,
    actual: TypeId,
    expected: TypeId,
) {
    let actual_text = ctx.render(actual);
    let expected_text = ctx.render(expected);
    if !ctx.oracle.is_assignable(actual, expected) {
        ctx.error_at(file, primary, format_message(messages::TOO_WIDE, &[&actual_text, &expected_text]));
    } else if !ctx.oracle.is_assignable(expected, actual) {
        ctx.error_at(file, primary, format_message(messages::TOO_SHORT, &[&actual_text, &expected_text]));
    } else if !ctx.oracle.is_identical(actual, expected) {
        let file_name = ctx.source(file).file_name.clone();
        let mut diagnostic = Diagnostic::error(
            file_name,
            format_message(messages::NOT_IDENTICAL, &[&actual_text, &expected_text]),
        )
        .with_diff(expected_text, actual_text);
        if let Some(location) = ctx.location_of(file, primary) {
            diagnostic = diagnostic.at(&location);
        }
        ctx.diagnostics.push(diagnostic);
    }
}

fn check_negated_identity(
    ctx: &mut HandlerContext<'_>,
    file: FileId,
    primary: NodeIndex,
    actual: TypeId,
    expected: TypeId,
) {
    if ctx.oracle.is_identical(actual, expected) {
        let actual_text = ctx.render(actual);
        let expected_text = ctx.render(expected);
        ctx.error_at(file, primary, format_message(messages::IDENTICAL, &[&actual_text, &expected_text]));
    }
}

pub(super) fn check_identical_to(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    for occurrence in occurrences {
        if let Some((actual, expected)) = fluent_types(ctx, occurrence) {
            check_identity(ctx, occurrence.file, occurrence.primary, actual, expected);
        }
    }
}

pub(super) fn check_not_identical_to(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    for occurrence in occurrences {
        if let Some((actual, expected)) = fluent_types(ctx, occurrence) {
            check_negated_identity(ctx, occurrence.file, occurrence.primary, actual, expected);
        }
    }
}

pub(super) fn check_type_identical(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    for occurrence in occurrences {
        if let Some((expected_node, actual_node)) = simple_operands(ctx.source(occurrence.file), occurrence.operand_a) {
            let expected = ctx.oracle.type_from_annotation(NodeRef { file: occurrence.file, node: expected_node });
            let actual = ctx.oracle.type_of_node(NodeRef { file: occurrence.file, node: actual_node });
            check_identity(ctx, occurrence.file, occurrence.primary, actual, expected);
        }
    }
}

pub(super) fn check_type_not_identical(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    for occurrence in occurrences {
        if let Some((expected_node, actual_node)) = simple_operands(ctx.source(occurrence.file), occurrence.operand_a) {
            let expected = ctx.oracle.type_from_annotation(NodeRef { file: occurrence.file, node: expected_node });
            let actual = ctx.oracle.type_of_node(NodeRef { file: occurrence.file, node: actual_node });
            check_negated_identity(ctx, occurrence.file, occurrence.primary, actual, expected);
        }
    }
}
