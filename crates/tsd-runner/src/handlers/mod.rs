//! Relation-check handlers and the dispatch registry.
//!
//! Handlers are pure with respect to the assertion table: they read the
//! occurrences and the oracle, and push diagnostics (plus, for error
//! expectations, `ExpectedError` annotations) into the shared
//! `HandlerContext`.

use crate::kinds::AssertionKind;
use crate::oracle::{TypeId, TypeOracle};
use crate::table::{AssertionOccurrence, ExpectedError};
use rustc_hash::FxHashMap;
use tsd_common::{Diagnostic, SourceLocation};
use tsd_syntax::{FileId, NodeIndex, Program, SourceFile};

mod assignability;
mod deprecation;
mod errors;
mod identity;
mod informational;
mod subtype;

/// Shared state handed to every handler invocation.
pub struct HandlerContext<'a> {
    pub program: &'a Program,
    pub oracle: &'a dyn TypeOracle,
    pub diagnostics: Vec<Diagnostic>,
    pub expected_errors: Vec<ExpectedError>,
}

impl<'a> HandlerContext<'a> {
    pub fn new(program: &'a Program, oracle: &'a dyn TypeOracle) -> HandlerContext<'a> {
        HandlerContext { program, oracle, diagnostics: Vec::new(), expected_errors: Vec::new() }
    }

    pub fn source(&self, file: FileId) -> &'a SourceFile {
        self.program.file(file)
    }

    pub fn location_of(&self, file: FileId, node: NodeIndex) -> Option<SourceLocation> {
        self.source(file).source_location(node)
    }

    pub fn node_text(&self, file: FileId, node: NodeIndex) -> &'a str {
        self.source(file).node_text(node)
    }

    pub fn render(&self, ty: TypeId) -> String {
        self.oracle.render_type(ty)
    }

    /// Push an error diagnostic positioned at a node.
    pub fn error_at(&mut self, file: FileId, node: NodeIndex, message: impl Into<String>) {
        self.push_at(file, node, Diagnostic::error(&self.source(file).file_name, message));
    }

    /// Push a warning diagnostic positioned at a node.
    pub fn warning_at(&mut self, file: FileId, node: NodeIndex, message: impl Into<String>) {
        self.push_at(file, node, Diagnostic::warning(&self.source(file).file_name, message));
    }

    fn push_at(&mut self, file: FileId, node: NodeIndex, mut diagnostic: Diagnostic) {
        if let Some(location) = self.location_of(file, node) {
            diagnostic = diagnostic.at(&location);
        }
        self.diagnostics.push(diagnostic);
    }
}

/// A relation-check handler for one assertion kind.
pub type HandlerFn = for<'a, 'b> fn(&'b mut HandlerContext<'a>, &'b [AssertionOccurrence]);

/// Kind-to-handler dispatch table.
///
/// Constructed once and passed into dispatch as a value, so test suites
/// can substitute fake handlers or leave kinds unhandled.
pub struct HandlerRegistry {
    handlers: FxHashMap<AssertionKind, HandlerFn>,
}

impl HandlerRegistry {
    /// A registry with no handlers at all.
    pub fn empty() -> HandlerRegistry {
        HandlerRegistry { handlers: FxHashMap::default() }
    }

    /// The full default set covering every recognized assertion kind.
    pub fn with_defaults() -> HandlerRegistry {
        let mut registry = HandlerRegistry::empty();
        registry.register(AssertionKind::TypeIdentical, identity::check_type_identical);
        registry.register(AssertionKind::TypeNotIdentical, identity::check_type_not_identical);
        registry.register(AssertionKind::IdenticalTo, identity::check_identical_to);
        registry.register(AssertionKind::NotIdenticalTo, identity::check_not_identical_to);
        registry.register(AssertionKind::Assignable, assignability::check_assignable);
        registry.register(AssertionKind::NotAssignable, assignability::check_not_assignable);
        registry.register(AssertionKind::AssignableTo, assignability::check_assignable_to);
        registry.register(AssertionKind::NotAssignableTo, assignability::check_not_assignable_to);
        registry.register(AssertionKind::SubtypeOf, subtype::check_subtype_of);
        registry.register(AssertionKind::NotSubtypeOf, subtype::check_not_subtype_of);
        registry.register(AssertionKind::ExpectError, errors::check_expect_error);
        registry.register(AssertionKind::ThrowsError, errors::check_throws_error);
        registry.register(AssertionKind::ExpectDeprecated, deprecation::check_deprecated);
        registry.register(AssertionKind::ExpectNotDeprecated, deprecation::check_not_deprecated);
        registry.register(AssertionKind::PrintType, informational::print_type);
        registry.register(AssertionKind::DocCommentIncludes, informational::check_doc_comment_includes);
        registry.register(AssertionKind::NeverCheck, informational::check_never);
        registry
    }

    pub fn register(&mut self, kind: AssertionKind, handler: HandlerFn) {
        self.handlers.insert(kind, handler);
    }

    pub fn get(&self, kind: AssertionKind) -> Option<HandlerFn> {
        self.handlers.get(&kind).copied()
    }
}

impl Default for HandlerRegistry {
    fn default() -> HandlerRegistry {
        HandlerRegistry::with_defaults()
    }
}
