//! Deprecation checks: `expectDeprecated` / `expectNotDeprecated`.
//!
//! The oracle resolves the JSDoc tags of the asserted expression's
//! signature or symbol; the check fails when the presence of a
//! `deprecated` tag does not match the asserted polarity.

use crate::handlers::HandlerContext;
use crate::messages;
use crate::operands::resolve_operand;
use crate::table::AssertionOccurrence;
use tsd_common::format_message;
use tsd_syntax::NodeRef;

const DEPRECATED_TAG: &str = "deprecated";

fn check(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence], expect_deprecated: bool) {
    for occurrence in occurrences {
        let Some(operand) = resolve_operand(ctx, occurrence.file, occurrence.operand_a) else {
            continue;
        };
        let tags = ctx.oracle.resolve_doc_tags(NodeRef { file: occurrence.file, node: operand.node });
        let deprecated = tags.iter().any(|tag| tag == DEPRECATED_TAG);
        if deprecated == expect_deprecated {
            continue;
        }
        let template = if expect_deprecated {
            messages::EXPECTED_DEPRECATED
        } else {
            messages::EXPECTED_NOT_DEPRECATED
        };
        let expression = ctx.node_text(occurrence.file, operand.node).to_string();
        ctx.error_at(occurrence.file, occurrence.primary, format_message(template, &[&expression]));
    }
}

pub(super) fn check_deprecated(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    check(ctx, occurrences, true);
}

pub(super) fn check_not_deprecated(ctx: &mut HandlerContext<'_>, occurrences: &[AssertionOccurrence]) {
    check(ctx, occurrences, false);
}
