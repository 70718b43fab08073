use log::{debug, trace};
use sprig_common::warning::warn_once;
use sprig_dom::{Attribute, Element, NodeId, Tree};

use crate::error::{ParseError, ParseErrorKind};
use crate::options::ParserOptions;
use crate::span::Span;
use crate::state::{Effect, ParserState, end_of_input, transition};

/// The result of a parse: the tree, plus the element left open when the
/// input ran out (if any).
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree,
    unclosed: Option<NodeId>,
}

impl Document {
    /// The parsed tree. Parsed elements hang off [`NodeId::ROOT`].
    #[must_use]
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Take ownership of the tree.
    #[must_use]
    pub fn into_tree(self) -> Tree {
        self.tree
    }

    /// The synthetic root node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// The node that was still current when parsing stopped, or `None` if
    /// every opened element was closed.
    ///
    /// Tag balance is not enforced; this is how callers can detect it.
    #[must_use]
    pub const fn unclosed(&self) -> Option<NodeId> {
        self.unclosed
    }
}

/// Single-pass, character-at-a-time parser.
///
/// The parser keeps a cursor to the currently open node instead of
/// re-walking the tree, and captures each token as a byte span that is only
/// copied out when its terminating character arrives.
pub struct Parser<'a> {
    input: &'a str,
    options: ParserOptions,
    state: ParserState,
    tree: Tree,
    /// The most recently opened node that has not been closed.
    current: NodeId,
    /// Number of open elements, root excluded.
    depth: usize,

    /// Offset of the `<` that started the tag being read.
    tag_start: usize,
    name_start: usize,
    key_start: usize,
    key: Span,
    value_start: usize,
    text_start: usize,

    /// Inside the remainder of a closing or self-closing tag.
    skipping_tag: bool,
    reported_dropped_text: bool,
}

impl<'a> Parser<'a> {
    /// Create a parser with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Create a parser with the given options.
    #[must_use]
    pub fn with_options(input: &'a str, options: ParserOptions) -> Self {
        Self {
            input,
            options,
            state: ParserState::default(),
            tree: Tree::new(),
            current: NodeId::ROOT,
            depth: 0,
            tag_start: 0,
            name_start: 0,
            key_start: 0,
            key: Span::default(),
            value_start: 0,
            text_start: 0,
            skipping_tag: false,
            reported_dropped_text: false,
        }
    }

    /// Parse the whole input.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; the partial tree is
    /// discarded.
    pub fn run(self) -> Result<Document, ParseError> {
        match self.run_with_partial() {
            (document, None) => Ok(document),
            (_, Some(error)) => Err(error),
        }
    }

    /// Parse the whole input, returning the tree built so far even when an
    /// error stops the parse.
    #[must_use]
    pub fn run_with_partial(mut self) -> (Document, Option<ParseError>) {
        let error = self.scan().err();
        match &error {
            Some(error) => debug!("parse stopped: {error}"),
            None => debug!(
                "parsed {} bytes into {} elements",
                self.input.len(),
                self.tree.len() - 1
            ),
        }

        let unclosed = (self.current != NodeId::ROOT).then_some(self.current);
        let document = Document {
            tree: self.tree,
            unclosed,
        };
        (document, error)
    }

    fn scan(&mut self) -> Result<(), ParseError> {
        let input = self.input;
        let mut chars = input.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            let lookahead = chars.peek().map(|&(_, c)| c);
            let step = transition(self.state, ch, lookahead);
            if step.next != self.state {
                trace!("{} -> {} on {ch:?} at byte {pos}", self.state, step.next);
            }

            let skip_quote = step.effect == Effect::EndAttributeKey;
            self.apply(step.effect, pos, ch)?;
            if skip_quote {
                let _ = chars.next();
            }
            self.state = step.next;
        }

        match end_of_input(self.state) {
            None => Ok(()),
            Some(kind) => {
                let offset = match self.state {
                    ParserState::ReadAttributeKey => self.key_start,
                    ParserState::ReadAttributeValue => self.value_start,
                    _ => self.input.len(),
                };
                Err(ParseError::new(kind, offset))
            }
        }
    }

    fn apply(&mut self, effect: Effect, pos: usize, ch: char) -> Result<(), ParseError> {
        match effect {
            Effect::None => self.note_skipped(pos, ch),
            Effect::BeginElementName => self.begin_element_name(pos),
            Effect::OpenElement => self.open_element(pos)?,
            Effect::OpenElementWithText => {
                self.open_element(pos)?;
                self.text_start = pos + 1;
            }
            Effect::OpenSelfClosingElement => {
                self.open_element(pos)?;
                self.self_close(pos)?;
            }
            Effect::BeginInnerText => self.text_start = pos + 1,
            Effect::SelfClose => self.self_close(pos)?,
            Effect::BeginAttributeKey => self.key_start = pos,
            Effect::EndAttributeKey => {
                // The quote after `=` is skipped; the value starts past it.
                self.key = Span::new(self.key_start, pos);
                self.value_start = pos + 2;
            }
            Effect::EndAttribute => self.end_attribute(pos),
            Effect::EndInnerTextThenClose => {
                self.end_inner_text(pos);
                self.close_element(pos)?;
            }
            Effect::EndInnerTextThenBeginName => {
                self.end_inner_text(pos);
                self.begin_element_name(pos);
            }
            Effect::CloseElement => self.close_element(pos)?,
            Effect::Fail(kind) => return Err(ParseError::new(kind, pos)),
        }
        Ok(())
    }

    const fn begin_element_name(&mut self, pos: usize) {
        self.tag_start = pos;
        self.name_start = pos + 1;
    }

    fn open_element(&mut self, pos: usize) -> Result<(), ParseError> {
        let name = Span::new(self.name_start, pos);
        if name.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyElementName,
                self.tag_start,
            ));
        }
        if self.depth >= self.options.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep {
                    limit: self.options.max_depth,
                },
                self.tag_start,
            ));
        }

        let name = name.text(self.input);
        let id = self.tree.alloc(Element::new(name));
        self.tree.append_child(self.current, id);
        self.current = id;
        self.depth += 1;
        debug!(
            "opened <{name}> at byte {}, depth {}",
            self.tag_start, self.depth
        );
        Ok(())
    }

    fn self_close(&mut self, pos: usize) -> Result<(), ParseError> {
        if let Some(element) = self.tree.element_mut(self.current) {
            let assigned = element.set_inner_text("");
            debug_assert!(assigned, "self-closing element already had inner text");
        }
        self.close_element(pos)
    }

    fn close_element(&mut self, pos: usize) -> Result<(), ParseError> {
        // The root is the only node without a parent.
        let Some(parent) = self.tree.parent(self.current) else {
            return Err(ParseError::new(ParseErrorKind::UnmatchedClosingTag, pos));
        };
        debug!("closed element at byte {pos}, depth {}", self.depth);
        self.current = parent;
        self.depth -= 1;
        self.skipping_tag = true;
        Ok(())
    }

    fn end_attribute(&mut self, pos: usize) {
        let key = self.key.text(self.input);
        let value = Span::new(self.value_start, pos).text(self.input);
        if let Some(element) = self.tree.element_mut(self.current) {
            element.add_attribute(Attribute::new(key, value));
        }
    }

    fn end_inner_text(&mut self, pos: usize) {
        let text = Span::new(self.text_start, pos).text(self.input);
        if let Some(element) = self.tree.element_mut(self.current)
            && !element.set_inner_text(text)
        {
            debug!("inner text of <{}> already set, ignoring", element.name);
        }
    }

    /// Track text the grammar has no place for: anything between tags that is
    /// not an element's leading inner text.
    fn note_skipped(&mut self, pos: usize, ch: char) {
        if self.state != ParserState::LookForElement {
            return;
        }
        if ch == '>' {
            self.skipping_tag = false;
        } else if !self.skipping_tag && !ch.is_whitespace() && !self.reported_dropped_text {
            self.reported_dropped_text = true;
            debug!("dropping text at byte {pos}");
            let _ = warn_once(
                "Parser",
                "text after a child element or outside any element is dropped",
            );
        }
    }
}

/// Parse `input` with default options.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse(input: &str) -> Result<Document, ParseError> {
    Parser::new(input).run()
}
