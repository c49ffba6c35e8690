//! Syntax model consumed by the tsd-rs assertion runner.
//!
//! The runner does not parse source text; it consumes an already-built
//! program snapshot. This crate defines that snapshot's shape:
//! - `NodeArena` - flat node storage with typed data pools and parent links
//! - `SourceFile` / `Program` / `FileId` / `NodeRef` - the snapshot handles
//! - `for_each_call_expression` - the depth-first pre-order walker
//!
//! Programs are built by an external loader (or directly through the arena
//! `add_*` constructors in tests).

pub mod arena;
pub use arena::{
    AccessExprData, CallExprData, IdentifierData, LiteralData, Node, NodeArena, NodeIndex,
    NodeList, SyntaxKind,
};

pub mod program;
pub use program::{FileId, NodeRef, Program, SourceFile};

pub mod walker;
pub use walker::for_each_call_expression;
