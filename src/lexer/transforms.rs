//! Text transforms attached to token definitions.
//!
//! A definition runs a pre-processing transform over the raw candidate it
//! matched and a post-processing transform over the accepted lexeme. Either
//! may fail: a failing pre-processing step rejects the definition, a failing
//! post-processing step turns the token into a diagnostic.

use crate::errors::errors::LexicalError;

/// Transform text, possibly failing.
pub trait Transform: Send + Sync {
    fn apply(&self, text: &str) -> Result<String, LexicalError>;
}

impl<F> Transform for F
where
    F: Fn(&str) -> Result<String, LexicalError> + Send + Sync,
{
    fn apply(&self, text: &str) -> Result<String, LexicalError> {
        self(text)
    }
}

/// Returns the text unchanged. Every definition starts with this on both ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn apply(&self, text: &str) -> Result<String, LexicalError> {
        Ok(text.to_string())
    }
}

/// Turns a quoted string literal into its content.
///
/// The surrounding quotes are dropped, `\b \t \n \f` become the control
/// characters they name, an escaped line break (`\n` or `\r\n`) becomes a
/// newline and any other escaped character stands for itself. A trailing
/// lone backslash is removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unescape;

impl Transform for Unescape {
    fn apply(&self, text: &str) -> Result<String, LexicalError> {
        let body = text
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .ok_or_else(|| LexicalError::Rejected {
                reason: format!("{:?} is not a quoted literal", text),
            })?;

        let mut result = String::with_capacity(body.len());
        let mut chars = body.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '\\' {
                result.push(ch);
                continue;
            }

            match chars.next() {
                Some('b') => result.push('\u{8}'),
                Some('t') => result.push('\t'),
                Some('n') => result.push('\n'),
                Some('f') => result.push('\u{c}'),
                Some('\r') if chars.peek() == Some(&'\n') => {
                    chars.next();
                    result.push('\n');
                }
                Some(other) => result.push(other),
                None => {}
            }
        }

        Ok(result)
    }
}

/// Fails with [`LexicalError::StringTooLong`] once the text has more than
/// `limit` characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    pub limit: usize,
}

impl Transform for MaxLength {
    fn apply(&self, text: &str) -> Result<String, LexicalError> {
        if text.chars().count() > self.limit {
            return Err(LexicalError::StringTooLong { limit: self.limit });
        }

        Ok(text.to_string())
    }
}

/// Replaces whatever was matched with a fixed diagnostic message.
#[derive(Debug, Clone)]
pub struct Rewrite(pub LexicalError);

impl Transform for Rewrite {
    fn apply(&self, _text: &str) -> Result<String, LexicalError> {
        Ok(self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unescape_control_characters() {
        let result = Unescape.apply(r#""a\bb\tc\nd\fe""#).unwrap();
        assert_eq!(result, "a\u{8}b\tc\nd\u{c}e");
    }

    #[test]
    fn test_unescape_other_characters() {
        assert_eq!(Unescape.apply(r#""say \"hi\"""#).unwrap(), "say \"hi\"");
        assert_eq!(Unescape.apply(r#""back\\slash""#).unwrap(), "back\\slash");
        assert_eq!(Unescape.apply("\"line\\\nbreak\"").unwrap(), "line\nbreak");
        assert_eq!(Unescape.apply(r#""\q""#).unwrap(), "q");
    }

    #[test]
    fn test_unescape_crlf_line_break() {
        assert_eq!(Unescape.apply("\"a\\\r\nb\"").unwrap(), "a\nb");
        // A lone carriage return is an ordinary escaped character.
        assert_eq!(Unescape.apply("\"a\\\rb\"").unwrap(), "a\rb");
    }

    #[test]
    fn test_unescape_rejects_unquoted_text() {
        let result = Unescape.apply("abc");
        assert!(matches!(result, Err(LexicalError::Rejected { .. })));
    }

    #[test]
    fn test_max_length_boundary() {
        let limit = MaxLength { limit: 3 };

        assert_eq!(limit.apply("abc").unwrap(), "abc");
        assert_eq!(
            limit.apply("abcd"),
            Err(LexicalError::StringTooLong { limit: 3 })
        );
        // Characters, not bytes.
        assert_eq!(limit.apply("äöü").unwrap(), "äöü");
    }

    #[test]
    fn test_rewrite() {
        let rewrite = Rewrite(LexicalError::EofInComment);
        assert_eq!(rewrite.apply("(* never closed").unwrap(), "EOF in comment");
    }

    #[test]
    fn test_closure_transform() {
        let upper = |text: &str| -> Result<String, LexicalError> { Ok(text.to_uppercase()) };
        assert_eq!(upper.apply("abc").unwrap(), "ABC");
    }
}
