//! Diagnostic value types.
//!
//! Diagnostics are the runner's product: every failure mode of every stage
//! is converted to a `Diagnostic` at the point of detection and nothing
//! escapes as a panic or error value. Instances are never mutated after
//! creation.

use crate::position::SourceLocation;
use serde::Serialize;

/// Diagnostic severity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

/// Expected/received type rendering attached to identity failures, for
/// formatters that display a diff.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diff {
    pub expected: String,
    pub received: String,
}

/// A diagnostic produced by the runner.
///
/// `line` is 1-based and `column` 0-based; both are absent for diagnostics
/// that have no position (e.g. rule collaborators reporting on a whole
/// file).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file_name: String,
    pub message: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<Diff>,
}

impl Diagnostic {
    pub fn error(file_name: impl Into<String>, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            file_name: file_name.into(),
            message: message.into(),
            severity: Severity::Error,
            line: None,
            column: None,
            diff: None,
        }
    }

    pub fn warning(file_name: impl Into<String>, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            severity: Severity::Warning,
            ..Diagnostic::error(file_name, message)
        }
    }

    /// Attach the line/column of a resolved location.
    pub fn at(mut self, location: &SourceLocation) -> Diagnostic {
        self.line = Some(location.line);
        self.column = Some(location.column);
        self
    }

    pub fn with_diff(mut self, expected: impl Into<String>, received: impl Into<String>) -> Diagnostic {
        self.diff = Some(Diff {
            expected: expected.into(),
            received: received.into(),
        });
        self
    }
}

/// A raw diagnostic from the type oracle's whole-program check.
///
/// Read-only input to error reconciliation; the runner never produces
/// these itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RawDiagnostic {
    pub location: SourceLocation,
    pub code: u32,
    pub message: String,
}

/// Substitute `{0}`-style placeholders in a message template.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
