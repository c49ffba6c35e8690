//! `printType`, `expectDocCommentIncludes`, and `expectNever`.

use crate::handlers::HandlerContext;
use crate::messages;
use crate::operands::{operand_type, resolve_operand};
use crate::table::AssertionOccurrence;
use tsd_common::format_message;
use tsd_syntax::{NodeRef, SyntaxKind};

/// `printType` always succeeds: it emits a warning-severity diagnostic with
/// the rendered type so a run is never failed by it.
pub(super) fn print_type(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    for occurrence in occurrences {
        let Some(operand) = resolve_operand(ctx, occurrence.file, occurrence.operand_a) else {
            continue;
        };
        let ty = operand_type(ctx, occurrence.file, operand);
        let expression = ctx.node_text(occurrence.file, operand.node).to_string();
        let rendered = ctx.render(ty);
        ctx.warning_at(
            occurrence.file,
            occurrence.primary,
            format_message(messages::PRINT_TYPE, &[&expression, &rendered]),
        );
    }
}

/// `expectNever` fails when the argument's type is anything but `never`.
pub(super) fn check_never(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    for occurrence in occurrences {
        let Some(operand) = resolve_operand(ctx, occurrence.file, occurrence.operand_a) else {
            continue;
        };
        let ty = operand_type(ctx, occurrence.file, operand);
        if ctx.oracle.is_identical(ty, ctx.oracle.never_type()) {
            continue;
        }
        let rendered = ctx.render(ty);
        ctx.error_at(occurrence.file, occurrence.primary, format_message(messages::NOT_NEVER, &[&rendered]));
    }
}

/// `expectDocCommentIncludes<'substring'>(expression)` fails when no doc
/// comment resolves, when the generic argument is missing or not a string
/// literal, or when the resolved comment does not contain the substring.
pub(super) fn check_doc_comment_includes(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    for occurrence in occurrences {
        let arena = &ctx.source(occurrence.file).arena;
        let Some(data) = arena.get(occurrence.operand_a).and_then(|n| arena.get_call_expr(n)) else {
            continue;
        };

        let type_argument = data.type_arguments.as_ref().and_then(|list| list.nodes.first().copied());
        let expected = type_argument
            .and_then(|index| arena.get(index))
            .filter(|node| node.kind == SyntaxKind::StringLiteral)
            .and_then(|node| arena.get_literal(node))
            .map(|literal| literal.text.clone());
        let Some(expected) = expected else {
            ctx.error_at(occurrence.file, occurrence.primary, messages::EXPECTED_STRING_LITERAL_TYPE_ARGUMENT);
            continue;
        };

        let Some(expression) = data.arguments.nodes.first().copied() else {
            continue;
        };
        let expression_text = ctx.node_text(occurrence.file, expression).to_string();
        match ctx.oracle.resolve_doc_comment(NodeRef { file: occurrence.file, node: expression }) {
            None => {
                ctx.error_at(
                    occurrence.file,
                    occurrence.primary,
                    format_message(messages::DOC_COMMENT_NOT_FOUND, &[&expression_text]),
                );
            }
            Some(comment) if !comment.contains(&expected) => {
                ctx.error_at(
                    occurrence.file,
                    occurrence.primary,
                    format_message(
                        messages::DOC_COMMENT_DOES_NOT_INCLUDE,
                        &[&comment, &expression_text, &expected],
                    ),
                );
            }
            Some(_) => {}
        }
    }
}
