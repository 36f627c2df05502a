use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

use crate::Position;

/// A fatal error: the scan (or the program) cannot continue.
///
/// Per-lexeme problems never end up here; they are [`LexicalError`]s and
/// travel inside diagnostic tokens instead.
#[derive(Debug)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::Sink { .. } => "SinkError",
            ErrorImpl::Io { .. } => "IoError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { pattern, .. } => ErrorTip::Suggestion(format!(
                "Pattern `{}` does not compile, check the token definitions",
                pattern
            )),
            ErrorImpl::UnrecognisedToken { token } => ErrorTip::Suggestion(format!(
                "No definition accepts `{}`, is the catch-all definition registered?",
                token
            )),
            ErrorImpl::Sink { .. } => ErrorTip::None,
            ErrorImpl::Io { path, .. } => {
                ErrorTip::Suggestion(format!("Check that `{}` is accessible", path.display()))
            }
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        ErrorImpl::from(error).into()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.position {
            Some(position) => write!(f, "{} at {}", self.internal_error, position),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("failed to emit token: {source}")]
    Sink {
        #[from]
        source: io::Error,
    },
    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A recoverable, per-lexeme problem. Its `Display` text is what ends up in
/// the emitted diagnostic token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("EOF in comment")]
    EofInComment,
    #[error("String constant too long")]
    StringTooLong { limit: usize },
    #[error("{reason}")]
    Rejected { reason: String },
}
