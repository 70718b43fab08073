/// Default limit on element nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Deepest element nesting accepted, not counting the synthetic root.
    ///
    /// Bounds the stack used by recursive consumers such as the printer.
    pub max_depth: usize,
}

impl ParserOptions {
    /// Replace the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
