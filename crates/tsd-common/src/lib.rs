//! Common types for the tsd-rs assertion runner.
//!
//! This crate provides the foundational value types shared across the
//! runner crates:
//! - Source spans (`Span`)
//! - Position/line lookup (`Position`, `LineMap`, `SourceLocation`)
//! - Diagnostics (`Severity`, `Diff`, `Diagnostic`, `RawDiagnostic`)

// Span - source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position/LineMap types for line/column source locations
pub mod position;
pub use position::{LineMap, Position, SourceLocation};

// Diagnostic value types produced by every stage of the runner
pub mod diagnostics;
pub use diagnostics::{Diagnostic, Diff, RawDiagnostic, Severity, format_message};
