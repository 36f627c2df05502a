#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::lexer::tokens::Token;

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A location in the source text: byte offset plus 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the position reached after consuming `text` from here.
    pub fn advanced_by(&self, text: &str) -> Self {
        let mut next = *self;
        for ch in text.chars() {
            if ch == '\n' {
                next.line += 1;
                next.column = 1;
            } else {
                next.column += 1;
            }
        }
        next.offset += text.len();
        next
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte `offset`, returning the 1-based line
/// number, the line text (with its newline, if any) and the offset inside it.
pub fn get_line_at_position(source: &str, offset: usize) -> Option<(usize, &str, usize)> {
    if offset >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return Some((line_number, line, offset - start));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Renders a diagnostic token as a short source excerpt:
///
/// ```text
/// Error: Unterminated string
/// -> input.cl
///   |
/// 3 | x <- "abc
///   | -----^
/// ```
pub fn render_diagnostic(token: &Token, source: &str, file: &str) -> String {
    let mut out = format!("Error: {}\n-> {}\n", token.value, file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, token.span.start.offset)
    else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
