//! Handler dispatch.

use crate::handlers::{HandlerContext, HandlerRegistry};
use crate::table::AssertionTable;

/// Invoke the registered handler for every assertion kind present in the
/// table, in first-seen kind order.
///
/// A kind with no registered handler is skipped: unrecognized or future
/// assertion kinds must never crash a run.
pub fn dispatch(table: &AssertionTable, registry: &HandlerRegistry, ctx: &mut HandlerContext<'_>) {
    for (kind, occurrences) in &table.occurrences {
        match registry.get(*kind) {
            Some(handler) => handler(ctx, occurrences),
            None => {
                tracing::debug!(?kind, count = occurrences.len(), "no handler registered for assertion kind");
            }
        }
    }
}
