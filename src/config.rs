//! Options that shape the token definitions.

/// The longest string literal, in characters after unescaping, that is
/// accepted as a STRING token.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    pub max_string_length: usize,
    /// When false, comments are consumed without producing tokens.
    pub emit_comments: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            emit_comments: true,
        }
    }
}

impl LexerOptions {
    pub fn with_max_string_length(mut self, max_string_length: usize) -> Self {
        self.max_string_length = max_string_length;
        self
    }

    pub fn with_comments(mut self, emit_comments: bool) -> Self {
        self.emit_comments = emit_comments;
        self
    }
}
