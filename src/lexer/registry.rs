//! The ordered catalogue of token definitions.
//!
//! Priority is positional: the scanner asks each definition in registration
//! order and the first one that accepts a prefix of the input wins, however
//! short that prefix is.

use std::fmt::Display;

use regex::Regex;
use tracing::debug;

use crate::{
    config::LexerOptions,
    errors::errors::{Error, ErrorImpl, LexicalError},
    MK_DEFINITION,
};

use super::{
    tokens::{TokenKind, KEYWORDS, OPERATORS, PUNCTUATION},
    transforms::{Identity, MaxLength, Rewrite, Transform, Unescape},
};

/// A way of recognising a lexeme at the very start of the input.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// A regular expression anchored with `\A`.
    Regex(Regex),
    /// Nested `open` ... `close` delimiters. Matches only when the outermost
    /// opener is closed.
    Balanced {
        open: &'static str,
        close: &'static str,
    },
}

impl Pattern {
    pub fn regex(source: &str) -> Result<Pattern, Error> {
        let anchored = format!(r"\A(?:{})", source);
        Regex::new(&anchored).map(Pattern::Regex).map_err(|source| {
            ErrorImpl::InvalidPattern {
                pattern: anchored,
                source,
            }
            .into()
        })
    }

    pub fn literal(text: &str) -> Result<Pattern, Error> {
        Pattern::regex(&regex::escape(text))
    }

    /// Length in bytes of the prefix of `text` this pattern accepts. Empty
    /// matches count as no match so the scanner always makes progress.
    pub fn match_len(&self, text: &str) -> Option<usize> {
        let len = match self {
            Pattern::Regex(regex) => regex.find(text).map(|m| m.end())?,
            Pattern::Balanced { open, close } => balanced_len(text, open, close)?,
        };

        (len > 0).then_some(len)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Regex(regex) => write!(f, "{}", regex.as_str()),
            Pattern::Balanced { open, close } => write!(f, "{} ... {} (nested)", open, close),
        }
    }
}

fn balanced_len(text: &str, open: &str, close: &str) -> Option<usize> {
    if !text.starts_with(open) {
        return None;
    }

    let mut depth = 0usize;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if rest.starts_with(open) {
            depth += 1;
            pos += open.len();
        } else if rest.starts_with(close) {
            depth -= 1;
            pos += close.len();
            if depth == 0 {
                return Some(pos);
            }
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    None
}

/// What a definition made of the remaining input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    NoMatch,
    /// A pattern matched but pre-processing refused the candidate.
    Rejected(LexicalError),
    Matched(Candidate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// How many bytes of the input the lexeme covers.
    pub consumed: usize,
    /// The lexeme after pre-processing.
    pub text: String,
}

/// A named token category: its patterns and its two transforms.
pub struct Definition {
    kind: TokenKind,
    patterns: Vec<Pattern>,
    pre_processing: Box<dyn Transform>,
    post_processing: Box<dyn Transform>,
    skipped: bool,
}

impl Definition {
    pub fn new(kind: TokenKind, patterns: Vec<Pattern>) -> Self {
        Definition {
            kind,
            patterns,
            pre_processing: Box::new(Identity),
            post_processing: Box::new(Identity),
            skipped: false,
        }
    }

    pub fn from_regexes(kind: TokenKind, sources: &[&str]) -> Result<Self, Error> {
        let patterns = sources
            .iter()
            .map(|source| Pattern::regex(source))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Definition::new(kind, patterns))
    }

    pub fn from_literals(kind: TokenKind, literals: &[&str]) -> Result<Self, Error> {
        let patterns = literals
            .iter()
            .map(|literal| Pattern::literal(literal))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Definition::new(kind, patterns))
    }

    pub fn with_pre_processing(mut self, transform: impl Transform + 'static) -> Self {
        self.pre_processing = Box::new(transform);
        self
    }

    pub fn with_post_processing(mut self, transform: impl Transform + 'static) -> Self {
        self.post_processing = Box::new(transform);
        self
    }

    /// Consume matches of this definition without emitting them.
    pub fn skipped(mut self, skipped: bool) -> Self {
        self.skipped = skipped;
        self
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Tries the patterns in order against the start of `text`; the first
    /// non-empty match is run through pre-processing.
    pub fn classify(&self, text: &str) -> Classification {
        let Some(consumed) = self
            .patterns
            .iter()
            .find_map(|pattern| pattern.match_len(text))
        else {
            return Classification::NoMatch;
        };

        match self.pre_processing.apply(&text[..consumed]) {
            Ok(text) => Classification::Matched(Candidate { consumed, text }),
            Err(error) => Classification::Rejected(error),
        }
    }

    pub fn post_process(&self, lexeme: &str) -> Result<String, LexicalError> {
        self.post_processing.apply(lexeme)
    }
}

impl std::fmt::Debug for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Definition")
            .field("kind", &self.kind)
            .field("patterns", &self.patterns)
            .field("skipped", &self.skipped)
            .finish_non_exhaustive()
    }
}

/// Definitions in priority order. Immutable once built.
#[derive(Debug, Default)]
pub struct Registry {
    definitions: Vec<Definition>,
}

impl Registry {
    pub fn new(definitions: Vec<Definition>) -> Self {
        let registry = Registry { definitions };
        registry.dump_at_debug();
        registry
    }

    /// The language's lexical rules.
    pub fn cool(options: &LexerOptions) -> Result<Registry, Error> {
        let keywords = KEYWORDS
            .iter()
            .map(|keyword| Pattern::regex(&format!(r"{}(?-u:\b)", keyword)))
            .collect::<Result<Vec<_>, _>>()?;

        let definitions = vec![
            Definition::new(TokenKind::Keyword, keywords),
            MK_DEFINITION!(TokenKind::Integer, "[0-9]")?,
            MK_DEFINITION!(TokenKind::ClassIdentifier, r"[A-Z](?-u:\w)*")?,
            MK_DEFINITION!(TokenKind::ObjectIdentifier, r"[a-z](?-u:\w)*")?,
            MK_DEFINITION!(TokenKind::SelfObject, "self")?,
            MK_DEFINITION!(TokenKind::SelfType, "SELF_TYPE")?,
            MK_DEFINITION!(TokenKind::String, r#""(?:[^"\\\n]|\\(?:\r\n|(?s:.)))*""#)?
                .with_pre_processing(Unescape)
                .with_post_processing(MaxLength {
                    limit: options.max_string_length,
                }),
            MK_DEFINITION!(TokenKind::Error, r#""[^\n]*\n"#, r#""[^\n]*\z"#)?
                .with_post_processing(Rewrite(LexicalError::UnterminatedString)),
            MK_DEFINITION!(TokenKind::OneLineComment, r"--[^\n]*")?
                .skipped(!options.emit_comments),
            Definition::new(
                TokenKind::MultiLineComment,
                vec![Pattern::Balanced {
                    open: "(*",
                    close: "*)",
                }],
            )
            .skipped(!options.emit_comments),
            MK_DEFINITION!(TokenKind::Error, r"\(\*(?s:.)*")?
                .with_post_processing(Rewrite(LexicalError::EofInComment)),
            MK_DEFINITION!(TokenKind::WhiteSpace, r"[\n\f\r\t ]*")?,
            Definition::from_literals(TokenKind::Operator, &OPERATORS)?,
            Definition::from_literals(TokenKind::Punctuation, &PUNCTUATION)?,
            MK_DEFINITION!(TokenKind::Error, r"(?s:.)")?,
        ];

        Ok(Registry::new(definitions))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// One line per pattern: `NAME\tpattern`, a blank line after each
    /// definition.
    pub fn dump(&self) -> String {
        let mut out = String::new();

        for definition in &self.definitions {
            for pattern in definition.patterns() {
                out.push_str(&format!("{}\t{}\n", definition.kind(), pattern));
            }
            out.push('\n');
        }

        out
    }

    fn dump_at_debug(&self) {
        for (priority, definition) in self.definitions.iter().enumerate() {
            for pattern in definition.patterns() {
                debug!(priority, kind = %definition.kind(), %pattern, "registered pattern");
            }
        }
    }
}
