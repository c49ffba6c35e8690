//! Assertion discovery and diagnostic reconciliation engine.
//!
//! This crate is the core of tsd-rs, a static type-assertion test runner:
//! given a program snapshot and a type oracle, it locates assertion
//! call-expressions, classifies them, runs the relation checks, reconciles
//! expect-error ranges against the oracle's raw diagnostics, and returns a
//! single ordered diagnostic list.
//!
//! The pipeline runs strictly in sequence over one fully-built snapshot:
//! - `classifier` - walks call expressions into an `AssertionTable`
//! - `dispatch` - routes each assertion kind to its registered handler
//! - `reconcile` - matches expected-error ranges against raw diagnostics
//! - `runner` - orchestration plus the final stable-ordered aggregation
//!
//! Nothing in the core can fail: every detected problem becomes a
//! `Diagnostic`, since diagnostics are this engine's product.

pub mod oracle;
pub use oracle::{Symbol, SupportedCodes, TypeId, TypeOracle};

pub mod kinds;
pub use kinds::AssertionKind;

pub mod messages;

pub mod table;
pub use table::{AssertionOccurrence, AssertionTable, ErrorConstraint, ExpectedError};

pub mod classifier;
pub use classifier::classify_call_expression;

mod operands;

pub mod handlers;
pub use handlers::{HandlerContext, HandlerFn, HandlerRegistry};

pub mod dispatch;
pub use dispatch::dispatch;

pub mod reconcile;
pub use reconcile::reconcile_expected_errors;

pub mod runner;
pub use runner::{TestRunner, aggregate};
