use std::fmt::Display;

use crate::Span;

/// Words reserved by the language, in the order their patterns are registered.
pub const KEYWORDS: [&str; 19] = [
    "class", "else", "false", "fi", "if", "in", "inherits", "isvoid", "let", "loop", "pool", "then",
    "while", "case", "esac", "new", "of", "not", "true",
];

pub const OPERATORS: [&str; 13] = [
    ".", "@", "~", "isvoid", "*", "/", "+", "-", "<-", "<=", "<", "=", "not",
];

pub const PUNCTUATION: [&str; 7] = [",", ":", ";", "(", ")", "{", "}"];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Integer,
    ClassIdentifier,
    ObjectIdentifier,
    SelfObject,
    SelfType,
    String,
    OneLineComment,
    MultiLineComment,
    WhiteSpace,
    Operator,
    Punctuation,
    Error,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Integer => "INTEGER",
            TokenKind::ClassIdentifier => "CLASS_IDENTIFIER",
            TokenKind::ObjectIdentifier => "OBJECT_IDENTIFIER",
            TokenKind::SelfObject => "SELF",
            TokenKind::SelfType => "SELF_TYPE",
            TokenKind::String => "STRING",
            TokenKind::OneLineComment => "ONE_LINE_COMMENT",
            TokenKind::MultiLineComment => "MULTI_LINE_COMMENT",
            TokenKind::WhiteSpace => "WHITE_SPACE",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Error => "ERROR",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

/// The output line format, without the trailing newline: `KIND\t value`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t {}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}
