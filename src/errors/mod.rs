//! Error types and error handling for the lexer.
//!
//! This module defines the two error families used by the crate:
//!
//! - Fatal errors (`Error` / `ErrorImpl`) that abort registry construction,
//!   a scan, or the command line program
//! - Recoverable lexical errors (`LexicalError`) whose messages become the
//!   text of diagnostic tokens
//! - Helpful suggestions for displaying fatal errors

pub mod errors;
