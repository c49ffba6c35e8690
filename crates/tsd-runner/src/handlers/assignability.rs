//! Assignability checks, single direction: actual -> expected.

use crate::handlers::HandlerContext;
use crate::messages;
use crate::operands::{operand_type, resolve_operand, simple_operands};
use crate::oracle::TypeId;
use crate::table::AssertionOccurrence;
use tsd_common::format_message;
use tsd_syntax::{FileId, NodeIndex, NodeRef};

fn check(
    ctx: &mut HandlerContext<'_>,
    file: FileId,
    primary: NodeIndex,
    actual: TypeId,
    expected: TypeId,
    expect_assignable: bool,
) {
    let assignable = ctx.oracle.is_assignable(actual, expected);
    if assignable == expect_assignable {
        return;
    }
    let template = if expect_assignable { messages::NOT_ASSIGNABLE } else { messages::ASSIGNABLE };
    let actual_text = ctx.render(actual);
    let expected_text = ctx.render(expected);
    ctx.error_at(file, primary, format_message(template, &[&actual_text, &expected_text]));
}

fn check_fluent(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence], expect_assignable: bool) {
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
        check(ctx, occurrence.file, occurrence.primary, actual, expected, expect_assignable);
    }
}

fn check_simple(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence], expect_assignable: bool) {
    for occurrence in occurrences {
        if let Some((expected_node, actual_node)) = simple_operands(ctx.source(occurrence.file), occurrence.operand_a) {
            let expected = ctx.oracle.type_from_annotation(NodeRef { file: occurrence.file, node: expected_node });
            let actual = ctx.oracle.type_of_node(NodeRef { file: occurrence.file, node: actual_node });
            check(ctx, occurrence.file, occurrence.primary, actual, expected, expect_assignable);
        }
    }
}

pub(super) fn check_assignable_to(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    check_fluent(ctx, occurrences, true);
}

pub(super) fn check_not_assignable_to(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    check_fluent(ctx, occurrences, false);
}

pub(super) fn check_assignable(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    check_simple(ctx, occurrences, true);
}

pub(super) fn check_not_assignable(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    check_simple(ctx, occurrences, false);
}
