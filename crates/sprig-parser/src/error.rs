use strum_macros::Display;
use thiserror::Error;

use crate::state::ParserState;

/// A parse failure and the byte offset at which it was detected.
///
/// The parser stops at the first error. Use
/// [`Parser::run_with_partial`](crate::Parser::run_with_partial) to keep the
/// tree built up to that point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte offset into the input.
    pub offset: usize,
}

impl ParseError {
    /// Create an error of the given kind at `offset`.
    #[must_use]
    pub const fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The kinds of malformed input the parser reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input ended inside a tag name, an opening tag, or an inner-text run.
    #[error("unexpected end of input in {state} state")]
    UnexpectedEndOfInput {
        /// State the parser was in when the input ran out.
        state: ParserState,
    },

    /// A closing tag was found while no element was open.
    #[error("closing tag without a matching open element")]
    UnmatchedClosingTag,

    /// An attribute that does not follow the `key="value"` form.
    #[error("malformed attribute: {reason}")]
    MalformedAttribute {
        /// Which part of the attribute is broken.
        reason: AttributeFault,
    },

    /// A tag whose name would be empty, such as `<>` or `< a>`.
    #[error("element name is empty")]
    EmptyElementName,

    /// Opening another element would exceed the configured nesting limit.
    #[error("elements nested deeper than {limit}")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

/// Ways an attribute can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AttributeFault {
    /// The `=` is not immediately followed by `"`.
    #[strum(to_string = "expected '\"' after '='")]
    MissingOpeningQuote,
    /// The input ended before an `=` closed the key.
    #[strum(to_string = "key is never followed by '='")]
    UnterminatedKey,
    /// The input ended before a `"` closed the value.
    #[strum(to_string = "value is missing its closing '\"'")]
    UnterminatedValue,
}
