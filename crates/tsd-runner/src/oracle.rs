//! Type oracle port.
//!
//! The runner never answers type-relation questions itself; it calls into
//! this trait. The production implementation wraps a real type checker;
//! tests substitute a fake.

use rustc_hash::FxHashSet;
use tsd_common::RawDiagnostic;
use tsd_syntax::NodeRef;

/// Opaque handle to a type owned by the oracle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

/// A resolved symbol. The runner only ever inspects the name, which is the
/// single boundary where assertion functions are recognized.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub name: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Symbol {
        Symbol { name: name.into() }
    }
}

/// External type-relation capability consumed by the runner.
///
/// All methods are queries over an already type-checked program snapshot;
/// none of them mutate oracle state.
pub trait TypeOracle {
    /// Resolve the symbol a node refers to, if any. Ordinary code mixed
    /// into test files resolves to symbols the classifier does not
    /// recognize, or to no symbol at all - both are expected.
    fn resolve_symbol(&self, node: NodeRef) -> Option<Symbol>;

    /// Follow import/export aliases to the original symbol.
    fn resolve_alias(&self, symbol: &Symbol) -> Symbol;

    /// The type of an expression node.
    fn type_of_node(&self, node: NodeRef) -> TypeId;

    /// The type denoted by a type-annotation node.
    fn type_from_annotation(&self, node: NodeRef) -> TypeId;

    /// Render a type as text for diagnostics.
    fn render_type(&self, ty: TypeId) -> String;

    fn is_assignable(&self, source: TypeId, target: TypeId) -> bool;

    fn is_identical(&self, a: TypeId, b: TypeId) -> bool;

    /// Subtype is a distinct relation from assignability; callers must not
    /// conflate the two (`any` and enums behave differently under each).
    fn is_subtype(&self, source: TypeId, target: TypeId) -> bool;

    /// The `never` type handle, used by the `expectNever` check.
    fn never_type(&self) -> TypeId;

    /// JSDoc tag names attached to the expression's signature or symbol.
    fn resolve_doc_tags(&self, node: NodeRef) -> Vec<String>;

    /// The expression's documentation comment, if one resolves.
    fn resolve_doc_comment(&self, node: NodeRef) -> Option<String>;

    /// The full diagnostic stream from the whole-program check.
    fn raw_diagnostics(&self) -> Vec<RawDiagnostic>;
}

/// Allow-list of diagnostic codes recognized as legitimate type errors
/// inside an `expectError` range. Codes outside the list are passed through
/// with an "unsupported" notice instead of being suppressed.
#[derive(Clone, Debug, Default)]
pub struct SupportedCodes {
    codes: FxHashSet<u32>,
}

impl SupportedCodes {
    pub fn new(codes: impl IntoIterator<Item = u32>) -> SupportedCodes {
        SupportedCodes { codes: codes.into_iter().collect() }
    }

    /// The codes the original tool ships with. Configuration of the list
    /// stays external; this is only a convenient starting point.
    pub fn tsd_defaults() -> SupportedCodes {
        SupportedCodes::new([
            2314, // Generic type requires type argument(s)
            2322, // Type is not assignable to type
            2326, // Types of property are incompatible
            2344, // Type does not satisfy the constraint
            2345, // Argument type is not assignable to parameter type
            2493, // Tuple has no element at index
            2588, // Cannot assign to const
            2589, // Type instantiation is excessively deep
            2615, // Type of property circularly references itself
            2739, // Type is missing properties
            2741, // Property is missing in type
        ])
    }

    pub fn contains(&self, code: u32) -> bool {
        self.codes.contains(&code)
    }
}
