//! Shared operand resolution.
//!
//! A call carrying a potential operand has a generic type-argument slot and
//! an argument-expression slot; exactly one of the two must be used. The
//! rules here are shared by every relation-check handler.

use crate::handlers::HandlerContext;
use crate::messages;
use crate::oracle::TypeId;
use tsd_syntax::{FileId, NodeIndex, NodeRef, SourceFile};

/// A resolved operand: the representative node (used purely for error
/// locations and source text) and which slot it came from.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Operand {
    pub node: NodeIndex,
    pub from_type_argument: bool,
}

/// Resolve the single operand of a call, emitting the ambiguity/missing
/// diagnostics when the slots are misused. `None` means a diagnostic was
/// emitted (or the node is not a call) and no relation check must follow.
pub(crate) fn resolve_operand(
    ctx: &mut HandlerContext<'_>,
    file: FileId,
    call: NodeIndex,
) -> Option<Operand> {
    let arena = &ctx.program.file(file).arena;
    let data = arena.get(call).and_then(|n| arena.get_call_expr(n))?;
    let type_argument = data.type_arguments.as_ref().and_then(|list| list.nodes.first().copied());
    let value_argument = data.arguments.nodes.first().copied();

    match (type_argument, value_argument) {
        (Some(_), Some(_)) => {
            ctx.error_at(file, call, messages::AMBIGUOUS_OPERAND);
            None
        }
        (None, None) => {
            ctx.error_at(file, call, messages::MISSING_OPERAND);
            None
        }
        (Some(node), None) => Some(Operand { node, from_type_argument: true }),
        (None, Some(node)) => Some(Operand { node, from_type_argument: false }),
    }
}

/// The type an operand denotes: from the annotation for a generic slot,
/// from the expression for a value slot.
pub(crate) fn operand_type(ctx: &HandlerContext<'_>, file: FileId, operand: Operand) -> TypeId {
    let node = NodeRef { file, node: operand.node };
    if operand.from_type_argument {
        ctx.oracle.type_from_annotation(node)
    } else {
        ctx.oracle.type_of_node(node)
    }
}

/// Operand extraction for the simple two-sided kinds
/// (`expectType<T>(value)` and friends): the expected type comes from the
/// sole generic type argument and the actual type from the sole value
/// argument. Occurrences missing either slot are skipped silently.
pub(crate) fn simple_operands(source: &SourceFile, call: NodeIndex) -> Option<(NodeIndex, NodeIndex)> {
    let arena = &source.arena;
    let data = arena.get(call).and_then(|n| arena.get_call_expr(n))?;
    let expected = data.type_arguments.as_ref().and_then(|list| list.nodes.first().copied())?;
    let actual = data.arguments.nodes.first().copied()?;
    Some((expected, actual))
}
