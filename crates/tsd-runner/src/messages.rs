//! Diagnostic message templates.
//!
//! Placeholders are `{0}`-style and substituted with
//! `tsd_common::format_message`. Keeping the exact strings in one module
//! keeps wording changes out of the handlers.

pub const MISSING_RIGHT_SIDE_METHOD: &str =
    "Missing right side method, expected something like `assertType('hello').assignableTo<string>()`.";

pub const MISSING_METHOD_ON_NOT: &str =
    "Missing method on `not`, expected something like `assertType('hello').not.assignableTo<number>()`.";

pub const AMBIGUOUS_OPERAND: &str =
    "Do not provide a generic type and an argument value at the same time.";

pub const MISSING_OPERAND: &str = "A generic type or an argument value is required.";

pub const TOO_WIDE: &str =
    "Parameter type `{0}` is declared too wide for argument type `{1}`.";

pub const TOO_SHORT: &str =
    "Parameter type `{0}` is declared too short for argument type `{1}`.";

pub const NOT_IDENTICAL: &str = "Parameter type `{0}` is not identical to argument type `{1}`.";

pub const IDENTICAL: &str = "Parameter type `{0}` is identical to argument type `{1}`.";

pub const NOT_ASSIGNABLE: &str =
    "Argument of type `{0}` is not assignable to parameter of type `{1}`.";

pub const ASSIGNABLE: &str = "Argument of type `{0}` is assignable to parameter of type `{1}`.";

pub const NOT_SUBTYPE: &str = "Argument of type `{0}` is not a subtype of parameter of type `{1}`.";

pub const SUBTYPE: &str = "Argument of type `{0}` is a subtype of parameter of type `{1}`.";

pub const NOT_NEVER: &str = "Argument of type `{0}` is not `never`.";

pub const EXPECTED_DEPRECATED: &str = "Expected `{0}` to be marked deprecated.";

pub const EXPECTED_NOT_DEPRECATED: &str = "Expected `{0}` to not be marked deprecated.";

pub const PRINT_TYPE: &str = "Type for expression `{0}` is: `{1}`";

pub const DOC_COMMENT_NOT_FOUND: &str = "Documentation comment for expression `{0}` not found.";

pub const EXPECTED_STRING_LITERAL_TYPE_ARGUMENT: &str = "Expected a string literal type argument.";

pub const DOC_COMMENT_DOES_NOT_INCLUDE: &str =
    "Documentation comment `{0}` for expression `{1}` does not include expected `{2}`.";

pub const INVALID_ERROR_CONSTRAINT: &str =
    "Expected a string, number, or regular expression argument.";

pub const INVALID_ERROR_PATTERN: &str = "Invalid regular expression pattern `{0}`.";

pub const EXPECTED_ERROR_NOT_FOUND: &str = "Expected an error, but found none.";

pub const UNSUPPORTED_ERROR_CODE: &str =
    "Found an error that tsd does not currently support (`ts{0}`), consider creating an issue on GitHub.";
