/*!
# `jsonlite` Library

Tokenizes, parses and re-renders a small JSON-like document format.

The format is narrower than standard JSON: values are objects, arrays,
strings and numbers only. Strings are taken verbatim (no escape sequences)
and numbers are optionally negated digit sequences.

```
use jsonlite::{Token, Value};

let tokens = jsonlite::tokenize(b"[1,2,3]").expect("valid input");
assert_eq!(
    tokens,
    vec![
        Token::LBracket,
        Token::NumberLit(1.0),
        Token::Comma,
        Token::NumberLit(2.0),
        Token::Comma,
        Token::NumberLit(3.0),
        Token::RBracket,
    ]
);

let value = jsonlite::parse(b"[1,2,3]").expect("valid document");
assert_eq!(jsonlite::render_value(&value), "[1, 2, 3]");
assert!(matches!(value, Value::Array(ref items) if items.len() == 3));
```
*/
use std::error::Error as StdError;
use std::fmt;

pub mod commands;
pub mod parser;
pub mod render;
pub mod tokenizer;
pub mod value;

// Re-exports
pub use parser::ParseError;
pub use parser::cursor::{CursorError, TokenCursor};
pub use render::{render_tokens, render_value};
pub use tokenizer::{LexError, Token, TokenKind, tokenize};
pub use value::Value;

/// Any error produced while turning input bytes into a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a value.
    Parse(ParseError),
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Tokenize and parse `input` into a [`Value`]. Tokens after the first
/// complete value are ignored.
///
/// # Errors
///
/// Returns [`Error::Lex`] if the input cannot be tokenized, or
/// [`Error::Parse`] if the tokens do not form a value.
pub fn parse(input: &[u8]) -> Result<Value, Error> {
    let mut cursor = TokenCursor::new(tokenize(input)?);
    Ok(parser::parse(&mut cursor)?)
}

/// Like [`parse`], but the value must span the whole input.
///
/// # Errors
///
/// Same as [`parse`], plus [`ParseError::TrailingTokens`] if anything
/// follows the value.
pub fn parse_strict(input: &[u8]) -> Result<Value, Error> {
    let mut cursor = TokenCursor::new(tokenize(input)?);
    Ok(parser::parse_complete(&mut cursor)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reports_stage() {
        assert_eq!(
            parse(b"@"),
            Err(Error::Lex(LexError::InvalidCharacter {
                found: '@',
                position: 0
            }))
        );
        assert_eq!(
            parse(b"\"abc"),
            Err(Error::Lex(LexError::UnterminatedString { start: 0 }))
        );
        assert_eq!(
            parse(b""),
            Err(Error::Parse(ParseError::Cursor(
                CursorError::UnexpectedEndOfInput { position: 0 }
            )))
        );
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(parse(b"1 2"), Ok(Value::Number(1.0)));
        assert!(matches!(
            parse_strict(b"1 2"),
            Err(Error::Parse(ParseError::TrailingTokens { position: 1, .. }))
        ));
        assert_eq!(parse_strict(b" [ ] "), Ok(Value::Array(vec![])));
    }

    #[test]
    fn test_lone_minus_parses_to_negative_zero() {
        let Ok(Value::Number(n)) = parse(b"-") else {
            panic!("expected a number");
        };
        assert!(n == 0.0 && n.is_sign_negative());
        assert_eq!(render_value(&Value::Number(n)), "-0");
    }

    #[test]
    fn test_error_display() {
        let err = parse(b"[1,]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected token ']' at token 3, expected '{' or '[' or string or number"
        );
    }
}
