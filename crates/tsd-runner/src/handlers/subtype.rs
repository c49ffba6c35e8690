//! Subtype checks: `assertType(...).subtypeOf(...)` and its negation.
//!
//! Subtype is a distinct relation from assignability - the oracle applies
//! different `any`/enum special-casing to each - so these handlers never
//! fall back to `is_assignable`.

use crate::handlers::HandlerContext;
use crate::messages;
use crate::operands::{operand_type, resolve_operand};
use crate::table::AssertionOccurrence;
use tsd_common::format_message;

fn check_fluent(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence], expect_subtype: bool) {
    for occurrence in occurrences {
        let Some(operand_b) = occurrence.operand_b else {
            continue;
        };
        let a = resolve_operand(ctx, occurrence.file, occurrence.operand_a);
        let b = resolve_operand(ctx, occurrence.file, operand_b);
        let (Some(a), Some(b)) = (a, b) else {
            continue;
        };
        let actual = operand_type(ctx, occurrence.file, a);
        let expected = operand_type(ctx, occurrence.file, b);

        let subtype = ctx.oracle.is_subtype(actual, expected);
        if subtype == expect_subtype {
            continue;
        }
        let template = if expect_subtype { messages::NOT_SUBTYPE } else { messages::SUBTYPE };
        let actual_text = ctx.render(actual);
        let expected_text = ctx.render(expected);
        ctx.error_at(
            occurrence.file,
            occurrence.primary,
            format_message(template, &[&actual_text, &expected_text]),
        );
    }
}

pub(super) fn check_subtype_of(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    check_fluent(ctx, occurrences, true);
}

pub(super) fn check_not_subtype_of(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    check_fluent(ctx, occurrences, false);
}
