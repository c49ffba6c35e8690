//! Assertion classifier.
//!
//! Given a call-expression node, decides whether it is a recognized
//! assertion and registers the occurrence in the assertion table. All
//! detected problems surface as classification diagnostics in the table;
//! nothing raises to the caller.

use crate::kinds::{AssertionKind, FLUENT_ENTRY, NEGATION_SEGMENT};
use crate::messages;
use crate::oracle::TypeOracle;
use crate::table::{AssertionOccurrence, AssertionTable};
use tsd_common::Diagnostic;
use tsd_syntax::{FileId, NodeIndex, NodeRef, Program, SourceFile};

/// Classify one call expression into the assertion table.
///
/// Symbol-name matching happens only here: the callee's resolved (and
/// alias-followed) symbol name is checked against the simple assertion
/// names and the fluent entry point. Nodes that resolve to no symbol are
/// ordinary code and are skipped silently.
pub fn classify_call_expression(
    program: &Program,
    oracle: &dyn TypeOracle,
    file: FileId,
    call: NodeIndex,
    table: &mut AssertionTable,
) {
    let source = program.file(file);
    let arena = &source.arena;
    let Some(node) = arena.get(call) else {
        return;
    };
    let Some(data) = arena.get_call_expr(node) else {
        return;
    };

    // Resolve the callee: the property-access target if present, else the
    // callee identifier itself.
    let name_node = match arena.get(data.expression).and_then(|n| arena.get_access_expr(n)) {
        Some(access) => access.name,
        None => data.expression,
    };
    let Some(symbol) = oracle.resolve_symbol(NodeRef { file, node: name_node }) else {
        return;
    };
    let symbol = oracle.resolve_alias(&symbol);

    if let Some(kind) = AssertionKind::from_simple_name(&symbol.name) {
        table.register(AssertionOccurrence {
            kind,
            file,
            primary: call,
            operand_a: call,
            operand_b: None,
        });
        if kind == AssertionKind::ExpectError
            && let Some(range) = source.source_location(call)
        {
            table.push_expected_error_range(range);
        }
        return;
    }

    if symbol.name == FLUENT_ENTRY {
        classify_fluent_chain(source, oracle, file, call, table);
    }
}

/// Chain-parse state. The fluent chain is
/// `assertType(...)` -> optional `.not` -> terminal method call.
#[derive(Copy, Clone, PartialEq, Eq)]
enum ChainState {
    AwaitingMethod,
    AwaitingNegatedMethod,
}

/// Parse the method chain hanging off an `assertType(...)` entry call.
///
/// Malformed chains (no right-side method, or `.not` followed by nothing)
/// produce a classification diagnostic at the entry call. Chains ending in
/// an unrecognized member, or in a recognized member that is never invoked,
/// are not assertions and are skipped silently.
fn classify_fluent_chain(
    source: &SourceFile,
    oracle: &dyn TypeOracle,
    file: FileId,
    entry_call: NodeIndex,
    table: &mut AssertionTable,
) {
    let arena = &source.arena;
    let mut state = ChainState::AwaitingMethod;
    let mut current = entry_call;

    loop {
        let parent = arena.parent(current);
        let access = arena
            .get(parent)
            .and_then(|n| arena.get_access_expr(n))
            .filter(|access| access.expression == current);
        let Some(access) = access else {
            let message = match state {
                ChainState::AwaitingMethod => messages::MISSING_RIGHT_SIDE_METHOD,
                ChainState::AwaitingNegatedMethod => messages::MISSING_METHOD_ON_NOT,
            };
            let mut diagnostic = Diagnostic::error(&source.file_name, message);
            if let Some(location) = source.source_location(entry_call) {
                diagnostic = diagnostic.at(&location);
            }
            table.push_diagnostic(diagnostic);
            return;
        };

        let name = member_name(source, oracle, file, access.name);
        if state == ChainState::AwaitingMethod && name == NEGATION_SEGMENT {
            state = ChainState::AwaitingNegatedMethod;
            current = parent;
            continue;
        }

        let negated = state == ChainState::AwaitingNegatedMethod;
        let Some(kind) = AssertionKind::from_fluent_terminal(negated, &name) else {
            return;
        };

        // The terminal member must itself be invoked; a bare member access
        // is indistinguishable from type-only helper usage.
        let terminal_call = arena.parent(parent);
        let invoked = arena
            .get(terminal_call)
            .and_then(|n| arena.get_call_expr(n))
            .is_some_and(|data| data.expression == parent);
        if !invoked {
            return;
        }

        table.register(AssertionOccurrence {
            kind,
            file,
            primary: terminal_call,
            operand_a: entry_call,
            operand_b: Some(terminal_call),
        });
        return;
    }
}

/// The name of a chain member: the resolved symbol's name when the oracle
/// knows one, the identifier text otherwise.
fn member_name(
    source: &SourceFile,
    oracle: &dyn TypeOracle,
    file: FileId,
    name_node: NodeIndex,
) -> String {
    if let Some(symbol) = oracle.resolve_symbol(NodeRef { file, node: name_node }) {
        return oracle.resolve_alias(&symbol).name;
    }
    source.arena.identifier_text(name_node).unwrap_or("").to_string()
}
