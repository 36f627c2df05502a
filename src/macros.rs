//! Utility macros for the lexer.
//!
//! This module defines helper macros used when building tokens and the
//! token registry:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFINITION!` - Creates a Definition from one or more regex sources
//!
//! These macros reduce boilerplate in the registry and the scanning loop.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "4".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Definition whose patterns are the given regex sources, tried
/// in the order written. Evaluates to `Result<Definition, Error>`.
///
/// # Example
///
/// ```ignore
/// let comment = MK_DEFINITION!(TokenKind::OneLineComment, "--[^\\n]*")?;
/// ```
#[macro_export]
macro_rules! MK_DEFINITION {
    ($kind:expr, $($pattern:expr),+ $(,)?) => {
        $crate::lexer::registry::Definition::from_regexes($kind, &[$($pattern),+])
    };
}
