//! Single-pass parser for simplified tag markup.
//!
//! # Scope
//!
//! This crate implements:
//! - **State machine** ([`state`]): six states and a pure transition function
//! - **Parser** ([`Parser`]): drives the machine over a resident buffer and
//!   builds a [`sprig_dom::Tree`]
//! - **Printer** ([`print_tree`]): depth-first rendering for inspection
//!
//! # Not Supported
//!
//! - Entity or escape decoding
//! - Checking that a closing tag names the element it closes
//! - Single-quoted or unquoted attribute values
//! - Streaming input
//! - Text after a child element (it is dropped)

/// Parse errors and their kinds.
pub mod error;
/// Parser tunables.
pub mod options;
/// The parser driver and its output.
pub mod parser;
/// Tree rendering for inspection.
pub mod printer;
/// Byte ranges into the input.
pub mod span;
/// Parser states and the transition table.
pub mod state;

pub use error::{AttributeFault, ParseError, ParseErrorKind};
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parser::{Document, Parser, parse};
pub use printer::{print_tree, render_tree, write_tree};
pub use span::Span;
pub use state::{Effect, ParserState, Transition, transition};
