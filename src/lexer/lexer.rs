use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::{
    config::LexerOptions,
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    registry::{Classification, Registry},
    sink::TokenSink,
    tokens::{Token, TokenKind},
};

lazy_static! {
    static ref DEFAULT_REGISTRY: Registry = Registry::cool(&LexerOptions::default())
        .expect("built-in token definitions must compile");
}

/// The registry built from [`LexerOptions::default`], shared by every
/// [`tokenize`] call.
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Scans one source text against a borrowed registry.
///
/// The cursor only moves forward, by exactly the length of each accepted
/// lexeme or of the whitespace trimmed in front of it.
pub struct Lexer<'a> {
    registry: &'a Registry,
    source: &'a str,
    pos: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(registry: &'a Registry, source: &'a str) -> Lexer<'a> {
        Lexer {
            registry,
            source,
            pos: Position::start(),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        let consumed = &self.source[self.pos.offset..self.pos.offset + n];
        self.pos = self.pos.advanced_by(consumed);
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos.offset >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        let remaining = self.remainder();
        let trimmed = remaining.trim_start();
        self.advance_n(remaining.len() - trimmed.len());
    }

    /// Produces the next token to emit, or `None` once the input is used up.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let registry = self.registry;

        loop {
            self.skip_whitespace();

            if self.at_eof() {
                return Ok(None);
            }

            let remaining = self.remainder();
            let start = self.pos;
            let mut accepted = None;

            for definition in registry.iter() {
                match definition.classify(remaining) {
                    Classification::NoMatch => continue,
                    Classification::Rejected(reason) => {
                        debug!(kind = %definition.kind(), %reason, at = %start, "candidate rejected");
                    }
                    Classification::Matched(candidate) => {
                        accepted = Some((definition, candidate));
                        break;
                    }
                }
            }

            let Some((definition, candidate)) = accepted else {
                let token = remaining.chars().next().map(String::from).unwrap_or_default();
                self.advance_n(remaining.len());
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, start));
            };

            self.advance_n(candidate.consumed);

            if definition.is_skipped() {
                trace!(kind = %definition.kind(), at = %start, "skipped lexeme");
                continue;
            }

            let span = Span {
                start,
                end: self.pos,
            };

            let token = match definition.post_process(&candidate.text) {
                Ok(value) => MK_TOKEN!(definition.kind(), value, span),
                Err(error) => MK_TOKEN!(TokenKind::Error, error.to_string(), span),
            };

            return Ok(Some(token));
        }
    }

    /// Runs the scan to the end, handing every token to `sink`. Returns how
    /// many tokens were emitted.
    pub fn drain_into<S: TokenSink>(&mut self, sink: &mut S) -> Result<usize, Error> {
        let mut emitted = 0;

        while let Some(token) = self.next_token()? {
            sink.emit(token)?;
            emitted += 1;
        }

        debug!(emitted, "scan finished");
        Ok(emitted)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

pub fn tokenize_with(registry: &Registry, source: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = vec![];
    Lexer::new(registry, source).drain_into(&mut tokens)?;
    Ok(tokens)
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(default_registry(), source)
}
