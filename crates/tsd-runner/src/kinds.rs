//! The closed set of recognized assertion kinds.
//!
//! Name matching against resolved symbols happens here and nowhere else;
//! the rest of the pipeline only ever sees the tagged kind.

/// Every assertion the runner recognizes.
///
/// Simple kinds are single call expressions (`expectType<T>(value)`);
/// fluent kinds are two-call chains rooted at `assertType`
/// (`assertType(value).identicalTo<T>()`), optionally negated through the
/// `.not` segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssertionKind {
    // Simple kinds
    TypeIdentical,
    TypeNotIdentical,
    Assignable,
    NotAssignable,
    ExpectError,
    ExpectDeprecated,
    ExpectNotDeprecated,
    PrintType,
    DocCommentIncludes,
    NeverCheck,
    // Fluent kinds
    IdenticalTo,
    NotIdenticalTo,
    AssignableTo,
    NotAssignableTo,
    SubtypeOf,
    NotSubtypeOf,
    ThrowsError,
}

/// The entry-point function name of the fluent assertion chain.
pub const FLUENT_ENTRY: &str = "assertType";

/// The negation segment of the fluent chain (`assertType(x).not.<method>()`).
pub const NEGATION_SEGMENT: &str = "not";

impl AssertionKind {
    /// Map a resolved symbol name to a simple assertion kind.
    pub fn from_simple_name(name: &str) -> Option<AssertionKind> {
        match name {
            "expectType" => Some(AssertionKind::TypeIdentical),
            "expectNotType" => Some(AssertionKind::TypeNotIdentical),
            "expectAssignable" => Some(AssertionKind::Assignable),
            "expectNotAssignable" => Some(AssertionKind::NotAssignable),
            "expectError" => Some(AssertionKind::ExpectError),
            "expectDeprecated" => Some(AssertionKind::ExpectDeprecated),
            "expectNotDeprecated" => Some(AssertionKind::ExpectNotDeprecated),
            "printType" => Some(AssertionKind::PrintType),
            "expectDocCommentIncludes" => Some(AssertionKind::DocCommentIncludes),
            "expectNever" => Some(AssertionKind::NeverCheck),
            _ => None,
        }
    }

    /// Map a fluent terminal method name (plus negation) to its kind.
    ///
    /// Unrecognized terminals return `None`: chains ending in type-only
    /// helper members are not assertions and produce no diagnostic.
    pub fn from_fluent_terminal(negated: bool, name: &str) -> Option<AssertionKind> {
        match (negated, name) {
            (false, "identicalTo") => Some(AssertionKind::IdenticalTo),
            (true, "identicalTo") => Some(AssertionKind::NotIdenticalTo),
            (false, "assignableTo") => Some(AssertionKind::AssignableTo),
            (true, "assignableTo") => Some(AssertionKind::NotAssignableTo),
            (false, "subtypeOf") => Some(AssertionKind::SubtypeOf),
            (true, "subtypeOf") => Some(AssertionKind::NotSubtypeOf),
            (false, "toThrowError") => Some(AssertionKind::ThrowsError),
            _ => None,
        }
    }

    pub fn is_fluent(self) -> bool {
        matches!(
            self,
            AssertionKind::IdenticalTo
                | AssertionKind::NotIdenticalTo
                | AssertionKind::AssignableTo
                | AssertionKind::NotAssignableTo
                | AssertionKind::SubtypeOf
                | AssertionKind::NotSubtypeOf
                | AssertionKind::ThrowsError
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_names_round_trip() {
        assert_eq!(AssertionKind::from_simple_name("expectType"), Some(AssertionKind::TypeIdentical));
        assert_eq!(AssertionKind::from_simple_name("expectNever"), Some(AssertionKind::NeverCheck));
        assert_eq!(AssertionKind::from_simple_name("assertType"), None);
        assert_eq!(AssertionKind::from_simple_name("describe"), None);
    }

    #[test]
    fn fluent_terminals_respect_negation() {
        assert_eq!(AssertionKind::from_fluent_terminal(false, "identicalTo"), Some(AssertionKind::IdenticalTo));
        assert_eq!(AssertionKind::from_fluent_terminal(true, "identicalTo"), Some(AssertionKind::NotIdenticalTo));
        assert_eq!(AssertionKind::from_fluent_terminal(true, "subtypeOf"), Some(AssertionKind::NotSubtypeOf));
        // There is no negated error expectation.
        assert_eq!(AssertionKind::from_fluent_terminal(true, "toThrowError"), None);
        assert_eq!(AssertionKind::from_fluent_terminal(false, "toString"), None);
    }

    #[test]
    fn fluent_flag_partitions_the_enum() {
        assert!(AssertionKind::IdenticalTo.is_fluent());
        assert!(AssertionKind::ThrowsError.is_fluent());
        assert!(!AssertionKind::ExpectError.is_fluent());
        assert!(!AssertionKind::PrintType.is_fluent());
    }
}
