//! The parser's states and its pure transition function.
//!
//! [`transition`] knows nothing about offsets or the tree: given the current
//! state, the character under the cursor and one character of lookahead, it
//! names the next state and the [`Effect`] the driver must apply. Keeping the
//! table here lets every row be tested on its own.

use strum_macros::{Display, EnumIter};

use crate::error::{AttributeFault, ParseErrorKind};

/// The parser state machine. The initial state is `LookForElement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum ParserState {
    /// Skipping text until the next `<`.
    #[default]
    LookForElement,
    /// Inside a tag name, waiting for `>`, ` ` or `/`.
    ReadElementName,
    /// Between attributes in an opening tag.
    LookForAttributeKey,
    /// Inside an attribute key, waiting for `=`.
    ReadAttributeKey,
    /// Inside a quoted attribute value, waiting for the closing `"`.
    ReadAttributeValue,
    /// Inside an element's inner text, waiting for `<`.
    ReadInnerHtml,
}

/// What the driver does with the current character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing; keep scanning.
    None,
    /// Start a tag-name capture at the next position.
    BeginElementName,
    /// Finish the tag name here, create the element and make it current.
    OpenElement,
    /// As `OpenElement`, then start an inner-text capture at the next position.
    OpenElementWithText,
    /// As `OpenElement`, then give it empty inner text and return to its parent.
    OpenSelfClosingElement,
    /// Start an inner-text capture at the next position.
    BeginInnerText,
    /// Give the current element empty inner text and return to its parent.
    SelfClose,
    /// Start an attribute-key capture at this position.
    BeginAttributeKey,
    /// Finish the key here and skip the opening quote that follows.
    EndAttributeKey,
    /// Finish the value here and append the attribute to the current element.
    EndAttribute,
    /// Finish the inner text here, then return to the parent.
    EndInnerTextThenClose,
    /// Finish the inner text here, then start a tag-name capture at the next position.
    EndInnerTextThenBeginName,
    /// Return to the parent of the current element.
    CloseElement,
    /// Stop with an error at this position.
    Fail(ParseErrorKind),
}

/// Result of feeding one character to [`transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State for the next character.
    pub next: ParserState,
    /// Action to take for this character.
    pub effect: Effect,
}

impl Transition {
    const fn to(next: ParserState, effect: Effect) -> Self {
        Self { next, effect }
    }

    const fn stay(state: ParserState) -> Self {
        Self::to(state, Effect::None)
    }
}

/// Compute the next state and effect for `ch` in `state`.
///
/// `lookahead` is the character after `ch`, or `None` at end of input.
#[must_use]
pub fn transition(state: ParserState, ch: char, lookahead: Option<char>) -> Transition {
    use ParserState::{
        LookForAttributeKey, LookForElement, ReadAttributeKey, ReadAttributeValue,
        ReadElementName, ReadInnerHtml,
    };

    match (state, ch) {
        (LookForElement, '<') if lookahead == Some('/') => {
            Transition::to(LookForElement, Effect::CloseElement)
        }
        (LookForElement, '<') => Transition::to(ReadElementName, Effect::BeginElementName),

        (ReadElementName, '>') => Transition::to(ReadInnerHtml, Effect::OpenElementWithText),
        (ReadElementName, ' ') => Transition::to(LookForAttributeKey, Effect::OpenElement),
        (ReadElementName, '/') => {
            Transition::to(LookForElement, Effect::OpenSelfClosingElement)
        }

        (LookForAttributeKey, '>') => Transition::to(ReadInnerHtml, Effect::BeginInnerText),
        (LookForAttributeKey, '/') => Transition::to(LookForElement, Effect::SelfClose),
        (LookForAttributeKey, ' ') => Transition::stay(LookForAttributeKey),
        (LookForAttributeKey, _) => Transition::to(ReadAttributeKey, Effect::BeginAttributeKey),

        (ReadAttributeKey, '=') => match lookahead {
            Some('"') => Transition::to(ReadAttributeValue, Effect::EndAttributeKey),
            Some(_) => Transition::to(
                ReadAttributeKey,
                Effect::Fail(ParseErrorKind::MalformedAttribute {
                    reason: AttributeFault::MissingOpeningQuote,
                }),
            ),
            None => Transition::to(
                ReadAttributeKey,
                Effect::Fail(ParseErrorKind::UnexpectedEndOfInput {
                    state: ReadAttributeKey,
                }),
            ),
        },

        (ReadAttributeValue, '"') => Transition::to(LookForAttributeKey, Effect::EndAttribute),

        (ReadInnerHtml, '<') if lookahead == Some('/') => {
            Transition::to(LookForElement, Effect::EndInnerTextThenClose)
        }
        (ReadInnerHtml, '<') => Transition::to(ReadElementName, Effect::EndInnerTextThenBeginName),

        (state, _) => Transition::stay(state),
    }
}

/// The error to report if the input ends while in `state`, or `None` if
/// ending there is fine.
///
/// Only `LookForElement` is a clean place to stop; balance of open and
/// closing tags is not checked.
#[must_use]
pub const fn end_of_input(state: ParserState) -> Option<ParseErrorKind> {
    match state {
        ParserState::LookForElement => None,
        ParserState::ReadAttributeKey => Some(ParseErrorKind::MalformedAttribute {
            reason: AttributeFault::UnterminatedKey,
        }),
        ParserState::ReadAttributeValue => Some(ParseErrorKind::MalformedAttribute {
            reason: AttributeFault::UnterminatedValue,
        }),
        ParserState::ReadElementName
        | ParserState::LookForAttributeKey
        | ParserState::ReadInnerHtml => Some(ParseErrorKind::UnexpectedEndOfInput { state }),
    }
}
