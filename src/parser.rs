/*!
# Parser

Recursive-descent parser turning a token sequence into a [`Value`] tree, one
procedure per grammar production:

```text
value   := object | array | STRING | NUMBER
object  := '{' '}' | '{' member (',' member)* '}'
member  := STRING ':' value
array   := '[' ']' | '[' value (',' value)* ']'
```

The grammar is LL(1): the kind of the current token always decides which
production to take.

## Examples

```rust
use jsonlite::parser::{self, cursor::TokenCursor};
use jsonlite::{Value, tokenize};

let tokens = tokenize(b"[1, 2, 3]").expect("valid input");
let mut cursor = TokenCursor::new(tokens);
let value = parser::parse(&mut cursor).expect("valid document");
assert_eq!(value, Value::Array(vec![1.0.into(), 2.0.into(), 3.0.into()]));
```

## Errors

Malformed token sequences fail with a [`ParseError`] naming what was expected
and what was found:

```rust
use jsonlite::parser::{self, ParseError, cursor::{CursorError, TokenCursor}};
use jsonlite::tokenizer::{TokenKind, tokenize};

let mut cursor = TokenCursor::new(tokenize(br#"{"a" 1}"#).unwrap());
let err = parser::parse(&mut cursor).unwrap_err();
assert!(matches!(
    err,
    ParseError::Cursor(CursorError::UnexpectedToken {
        found: TokenKind::NumberLit,
        ..
    })
));
```

Tokens left over after a complete value are ignored by [`parse`];
[`parse_complete`] rejects them.
*/
pub mod cursor;

use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use crate::tokenizer::TokenKind;
use crate::value::Value;
use cursor::{CursorError, Handler, TokenCursor};

/// Maximum number of containers that may be open at once.
pub const MAX_DEPTH: usize = 128;

/// Represents errors that can occur while parsing a token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The token sequence does not match the grammar.
    Cursor(CursorError),
    /// A complete value was parsed but tokens remain.
    TrailingTokens {
        /// Kind of the first unconsumed token
        found: TokenKind,
        /// Index of the first unconsumed token
        position: usize,
    },
    /// Containers are nested more deeply than [`MAX_DEPTH`].
    NestingTooDeep {
        /// The nesting limit that was exceeded
        limit: usize,
        /// Index of the opening token that exceeded the limit
        position: usize,
    },
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cursor(err) => write!(f, "{err}"),
            Self::TrailingTokens { found, position } => {
                write!(
                    f,
                    "Unexpected trailing token {found} at token {position}"
                )
            }
            Self::NestingTooDeep { limit, position } => {
                write!(
                    f,
                    "Nesting deeper than {limit} levels at token {position}"
                )
            }
        }
    }
}

impl From<CursorError> for ParseError {
    fn from(err: CursorError) -> Self {
        Self::Cursor(err)
    }
}

const VALUE_HANDLERS: [(TokenKind, Handler<Value, ParseError>); 4] = [
    (TokenKind::LBrace, parse_object),
    (TokenKind::LBracket, parse_array),
    (TokenKind::StringLit, parse_string),
    (TokenKind::NumberLit, parse_number),
];

/// Parse a single value from the cursor's current position. Any tokens after
/// the value are left unconsumed.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first point where the tokens do
/// not match the grammar.
pub fn parse(cursor: &mut TokenCursor) -> Result<Value, ParseError> {
    parse_value(cursor)
}

/// Parse a single value and require that it spans every remaining token.
///
/// # Errors
///
/// Same as [`parse`], plus [`ParseError::TrailingTokens`] if any token
/// follows the value.
pub fn parse_complete(cursor: &mut TokenCursor) -> Result<Value, ParseError> {
    let value = parse_value(cursor)?;
    if let Ok(token) = cursor.current() {
        return Err(ParseError::TrailingTokens {
            found: token.kind(),
            position: cursor.position(),
        });
    }
    Ok(value)
}

/// Parse any value, choosing the production from the current token's kind.
///
/// # Errors
///
/// Returns [`CursorError::UnexpectedToken`] if the current token cannot start
/// a value, or [`CursorError::UnexpectedEndOfInput`] if there is none.
pub fn parse_value(cursor: &mut TokenCursor) -> Result<Value, ParseError> {
    cursor.dispatch_on_current(&VALUE_HANDLERS)
}

/// Parse an object. Duplicate keys keep the last value.
///
/// # Errors
///
/// Returns a [`ParseError`] if the tokens do not form an object.
pub fn parse_object(cursor: &mut TokenCursor) -> Result<Value, ParseError> {
    within_container(cursor, TokenKind::LBrace, |cursor| {
        let mut map = HashMap::new();

        if !cursor.consume_if_matches(TokenKind::RBrace)? {
            parse_member(cursor, &mut map)?;
            while !cursor.consume_if_matches(TokenKind::RBrace)? {
                cursor.expect(TokenKind::Comma)?;
                parse_member(cursor, &mut map)?;
            }
        }

        Ok(Value::Object(map))
    })
}

/// Parse one `STRING ':' value` member into `map`.
fn parse_member(
    cursor: &mut TokenCursor,
    map: &mut HashMap<String, Value>,
) -> Result<(), ParseError> {
    let key = cursor.expect_string()?;
    cursor.expect(TokenKind::Colon)?;
    let value = parse_value(cursor)?;
    if map.insert(key, value).is_some() {
        debug!("duplicate key before token {} overwritten", cursor.position());
    }
    Ok(())
}

/// Parse an array.
///
/// # Errors
///
/// Returns a [`ParseError`] if the tokens do not form an array.
pub fn parse_array(cursor: &mut TokenCursor) -> Result<Value, ParseError> {
    within_container(cursor, TokenKind::LBracket, |cursor| {
        let mut items = vec![];

        if !cursor.consume_if_matches(TokenKind::RBracket)? {
            items.push(parse_value(cursor)?);
            while !cursor.consume_if_matches(TokenKind::RBracket)? {
                cursor.expect(TokenKind::Comma)?;
                items.push(parse_value(cursor)?);
            }
        }

        Ok(Value::Array(items))
    })
}

/// Parse a string literal.
///
/// # Errors
///
/// Returns a [`ParseError`] if the current token is not a string literal.
pub fn parse_string(cursor: &mut TokenCursor) -> Result<Value, ParseError> {
    Ok(Value::String(cursor.expect_string()?))
}

/// Parse a number literal.
///
/// # Errors
///
/// Returns a [`ParseError`] if the current token is not a number literal.
pub fn parse_number(cursor: &mut TokenCursor) -> Result<Value, ParseError> {
    Ok(Value::Number(cursor.expect_number()?))
}

/// Consume the opening token of a container, enforcing [`MAX_DEPTH`], then
/// parse its body. The cursor's nesting depth is restored whether or not the
/// body succeeds.
fn within_container<F>(
    cursor: &mut TokenCursor,
    opening: TokenKind,
    body: F,
) -> Result<Value, ParseError>
where
    F: FnOnce(&mut TokenCursor) -> Result<Value, ParseError>,
{
    let position = cursor.position();
    cursor.expect(opening)?;
    if cursor.depth() >= MAX_DEPTH {
        return Err(ParseError::NestingTooDeep {
            limit: MAX_DEPTH,
            position,
        });
    }

    cursor.enter_container();
    let result = body(cursor);
    cursor.leave_container();
    result
}
