//! Error expectations: `expectError(...)` and
//! `assertType(...).toThrowError(...)`.
//!
//! Neither compares types. `expectError` ranges are recorded during
//! classification; the handler only validates operand usage.
//! `toThrowError` records an expected-error annotation - optionally
//! constrained by message substring, numeric code, or pattern - keyed by
//! the assertion's source range for consumption by reconciliation.

use crate::handlers::HandlerContext;
use crate::messages;
use crate::operands::resolve_operand;
use crate::table::{AssertionOccurrence, ErrorConstraint, ExpectedError};
use regex::Regex;
use tsd_common::format_message;
use tsd_syntax::{FileId, NodeIndex, SyntaxKind};

pub(super) fn check_expect_error(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    for occurrence in occurrences {
        // Slot misuse still surfaces; the expectation itself was recorded
        // at classification time.
        let _ = resolve_operand(ctx, occurrence.file, occurrence.operand_a);
    }
}

pub(super) fn check_throws_error(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    for occurrence in occurrences {
        let Some(terminal) = occurrence.operand_b else {
            continue;
        };
        if resolve_operand(ctx, occurrence.file, occurrence.operand_a).is_none() {
            continue;
        }
        let Some(range) = ctx.location_of(occurrence.file, occurrence.primary) else {
            continue;
        };
        let constraint = constraint_from_terminal(ctx, occurrence.file, terminal);
        ctx.expected_errors.push(ExpectedError { range, constraint });
    }
}

/// Read the optional constraint off the terminal call's first argument.
/// An absent argument means "some error expected here"; an unusable one
/// produces a diagnostic and degrades to the unconstrained expectation.
fn constraint_from_terminal(
    ctx: &mut HandlerContext<'_>,
    file: FileId,
    terminal: NodeIndex,
) -> Option<ErrorConstraint> {
    let arena = &ctx.source(file).arena;
    let data = arena.get(terminal).and_then(|n| arena.get_call_expr(n))?;
    let argument = data.arguments.nodes.first().copied()?;
    let Some(node) = arena.get(argument) else {
        return None;
    };
    let text = arena.get_literal(node).map(|literal| literal.text.clone());

    match (node.kind, text) {
        (SyntaxKind::StringLiteral, Some(text)) => Some(ErrorConstraint::MessageIncludes(text)),
        (SyntaxKind::NumericLiteral, Some(text)) => match text.parse::<u32>() {
            Ok(code) => Some(ErrorConstraint::Code(code)),
            Err(_) => {
                ctx.error_at(file, argument, messages::INVALID_ERROR_CONSTRAINT);
                None
            }
        },
        (SyntaxKind::RegexLiteral, Some(text)) => match Regex::new(&text) {
            Ok(pattern) => Some(ErrorConstraint::Pattern(pattern)),
            Err(_) => {
                ctx.error_at(file, argument, format_message(messages::INVALID_ERROR_PATTERN, &[&text]));
                None
            }
        },
        _ => {
            ctx.error_at(file, argument, messages::INVALID_ERROR_CONSTRAINT);
            None
        }
    }
}
