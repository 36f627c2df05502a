//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of classified tokens. It handles:
//!
//! - An ordered registry of token definitions, tried first-match
//! - Pre- and post-processing transforms on candidate lexemes
//! - Recognition of keywords, identifiers, literals, operators and comments
//! - Diagnostic tokens for unterminated strings and comments, over-long
//!   strings and stray characters
//! - Token sinks that collect tokens or write them out line by line

pub mod lexer;
pub mod registry;
pub mod sink;
pub mod tokens;
pub mod transforms;
