/*!
# Token Cursor

A position-tracking reader over an owned token sequence. The grammar
productions in [`crate::parser`] are written entirely in terms of the
operations here: require a token of some kind, test for one, or branch on the
kind of the current token.

Reading past the last token is always an error, never a default value.

```
use jsonlite::parser::cursor::{CursorError, TokenCursor};
use jsonlite::tokenizer::{Token, TokenKind};

let mut cursor = TokenCursor::new(vec![Token::LBrace, Token::RBrace]);
assert!(cursor.consume_if_matches(TokenKind::LBrace).unwrap());
assert!(!cursor.consume_if_matches(TokenKind::Comma).unwrap());
cursor.expect(TokenKind::RBrace).unwrap();
assert!(matches!(
    cursor.current(),
    Err(CursorError::UnexpectedEndOfInput { position: 2 })
));
```
*/
use std::error::Error;
use std::fmt;

use crate::tokenizer::{Token, TokenKind};

/// A grammar procedure that [`TokenCursor::dispatch_on_current`] can branch
/// to.
pub type Handler<T, E> = fn(&mut TokenCursor) -> Result<T, E>;

/// Represents errors raised when the token sequence does not have the shape a
/// grammar production requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// A token was required but the sequence has been fully read.
    UnexpectedEndOfInput {
        /// Index of the missing token
        position: usize,
    },
    /// The current token is not of any kind that was acceptable here.
    UnexpectedToken {
        /// The kinds that would have been accepted
        expected: Vec<TokenKind>,
        /// The kind actually found
        found: TokenKind,
        /// Index of the offending token
        position: usize,
    },
}

impl Error for CursorError {}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input at token {position}")
            }
            Self::UnexpectedToken {
                expected,
                found,
                position,
            } => {
                write!(f, "Unexpected token {found} at token {position}")?;
                if !expected.is_empty() {
                    let expected = expected
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" or ");
                    write!(f, ", expected {expected}")?;
                }
                Ok(())
            }
        }
    }
}

/// A stateful positional reader over a fixed token sequence.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    /// The token sequence being read
    tokens: Vec<Token>,
    /// Index of the current token; never decreases
    position: usize,
    /// Number of containers currently open, maintained by the parser and
    /// balanced on every return path
    depth: usize,
}

impl TokenCursor {
    /// Construct a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Index of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Whether every token has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Number of tokens not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }

    /// Returns the current token without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::UnexpectedEndOfInput`] if every token has been
    /// consumed.
    pub fn current(&self) -> Result<&Token, CursorError> {
        self.tokens
            .get(self.position)
            .ok_or(CursorError::UnexpectedEndOfInput {
                position: self.position,
            })
    }

    /// Requires the current token to be of kind `kind`, consumes it and
    /// returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::UnexpectedToken`] if the current token is of
    /// another kind (nothing is consumed), or
    /// [`CursorError::UnexpectedEndOfInput`] if there is no current token.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, CursorError> {
        let token = self.current()?;
        if token.kind() != kind {
            return Err(self.unexpected(vec![kind], token.kind()));
        }
        let token = token.clone();
        self.advance();
        Ok(token)
    }

    /// Requires a string literal and returns its text.
    ///
    /// # Errors
    ///
    /// See [`TokenCursor::expect`].
    pub fn expect_string(&mut self) -> Result<String, CursorError> {
        let position = self.position;
        match self.tokens.get_mut(position) {
            Some(Token::StringLit(text)) => {
                // Consumed tokens are never read again
                let text = std::mem::take(text);
                self.advance();
                Ok(text)
            }
            Some(other) => {
                let found = other.kind();
                Err(self.unexpected(vec![TokenKind::StringLit], found))
            }
            None => Err(CursorError::UnexpectedEndOfInput { position }),
        }
    }

    /// Requires a number literal and returns its value.
    ///
    /// # Errors
    ///
    /// See [`TokenCursor::expect`].
    pub fn expect_number(&mut self) -> Result<f64, CursorError> {
        match *self.current()? {
            Token::NumberLit(value) => {
                self.advance();
                Ok(value)
            }
            ref other => {
                Err(self.unexpected(vec![TokenKind::NumberLit], other.kind()))
            }
        }
    }

    /// Tests whether the current token is of kind `kind`, without consuming
    /// it.
    ///
    /// # Errors
    ///
    /// Peeking past the end is an error rather than `false`: returns
    /// [`CursorError::UnexpectedEndOfInput`] if there is no current token.
    pub fn matches(&self, kind: TokenKind) -> Result<bool, CursorError> {
        Ok(self.current()?.kind() == kind)
    }

    /// Consumes the current token if it is of kind `kind`, returning whether
    /// it did.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::UnexpectedEndOfInput`] if there is no current
    /// token.
    pub fn consume_if_matches(
        &mut self,
        kind: TokenKind,
    ) -> Result<bool, CursorError> {
        let matched = self.matches(kind)?;
        if matched {
            self.advance();
        }
        Ok(matched)
    }

    /// Invokes the handler registered for the current token's kind. The
    /// handler receives the cursor with the current token still unconsumed.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::UnexpectedToken`] (listing every handled kind)
    /// if no handler is registered for the current kind,
    /// [`CursorError::UnexpectedEndOfInput`] if there is no current token, or
    /// whatever the chosen handler returns.
    pub fn dispatch_on_current<T, E>(
        &mut self,
        handlers: &[(TokenKind, Handler<T, E>)],
    ) -> Result<T, E>
    where
        E: From<CursorError>,
    {
        let found = self.current()?.kind();
        let Some(&(_, handler)) = handlers.iter().find(|(kind, _)| *kind == found)
        else {
            let expected = handlers.iter().map(|(kind, _)| *kind).collect();
            return Err(self.unexpected(expected, found).into());
        };
        handler(self)
    }

    /// Number of containers the parser currently has open.
    pub(crate) const fn depth(&self) -> usize {
        self.depth
    }

    /// Records that the parser opened a container.
    pub(crate) const fn enter_container(&mut self) {
        self.depth += 1;
    }

    /// Records that the parser closed a container.
    pub(crate) const fn leave_container(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    const fn advance(&mut self) {
        self.position += 1;
    }

    fn unexpected(
        &self,
        expected: Vec<TokenKind>,
        found: TokenKind,
    ) -> CursorError {
        CursorError::UnexpectedToken {
            expected,
            found,
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(tokens: Vec<Token>) -> TokenCursor {
        TokenCursor::new(tokens)
    }

    #[test]
    fn test_current_on_empty() {
        let empty = cursor(vec![]);
        assert!(empty.is_at_end());
        assert_eq!(
            empty.current(),
            Err(CursorError::UnexpectedEndOfInput { position: 0 })
        );
    }

    #[test]
    fn test_expect_advances_on_match() {
        let mut c = cursor(vec![Token::StringLit("k".into()), Token::Colon]);
        assert_eq!(
            c.expect(TokenKind::StringLit),
            Ok(Token::StringLit("k".into()))
        );
        assert_eq!(c.position(), 1);
        assert_eq!(c.expect(TokenKind::Colon), Ok(Token::Colon));
        assert!(c.is_at_end());
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn test_expect_mismatch_does_not_advance() {
        let mut c = cursor(vec![Token::NumberLit(1.0)]);
        assert_eq!(
            c.expect(TokenKind::Colon),
            Err(CursorError::UnexpectedToken {
                expected: vec![TokenKind::Colon],
                found: TokenKind::NumberLit,
                position: 0,
            })
        );
        assert_eq!(c.position(), 0);
        assert_eq!(c.expect_number(), Ok(1.0));
        assert_eq!(
            c.expect(TokenKind::Colon),
            Err(CursorError::UnexpectedEndOfInput { position: 1 })
        );
    }

    #[test]
    fn test_typed_expect() {
        let mut c = cursor(vec![Token::StringLit("key".into()), Token::NumberLit(-2.0)]);
        assert_eq!(
            c.expect_number(),
            Err(CursorError::UnexpectedToken {
                expected: vec![TokenKind::NumberLit],
                found: TokenKind::StringLit,
                position: 0,
            })
        );
        assert_eq!(c.expect_string(), Ok("key".to_string()));
        assert_eq!(
            c.expect_string(),
            Err(CursorError::UnexpectedToken {
                expected: vec![TokenKind::StringLit],
                found: TokenKind::NumberLit,
                position: 1,
            })
        );
        assert_eq!(c.position(), 1);
        assert_eq!(c.expect_number(), Ok(-2.0));
        assert_eq!(
            c.expect_string(),
            Err(CursorError::UnexpectedEndOfInput { position: 2 })
        );
        assert_eq!(
            c.expect_number(),
            Err(CursorError::UnexpectedEndOfInput { position: 2 })
        );
    }

    #[test]
    fn test_matches_is_an_error_past_end() {
        let mut c = cursor(vec![Token::Comma]);
        assert_eq!(c.matches(TokenKind::Comma), Ok(true));
        assert_eq!(c.matches(TokenKind::Colon), Ok(false));
        assert_eq!(c.position(), 0);
        assert_eq!(c.consume_if_matches(TokenKind::Colon), Ok(false));
        assert_eq!(c.position(), 0);
        assert_eq!(c.consume_if_matches(TokenKind::Comma), Ok(true));
        assert_eq!(c.position(), 1);
        assert_eq!(
            c.matches(TokenKind::Comma),
            Err(CursorError::UnexpectedEndOfInput { position: 1 })
        );
        assert_eq!(
            c.consume_if_matches(TokenKind::Comma),
            Err(CursorError::UnexpectedEndOfInput { position: 1 })
        );
    }

    fn name_brace(c: &mut TokenCursor) -> Result<&'static str, CursorError> {
        c.expect(TokenKind::LBrace)?;
        Ok("brace")
    }

    fn name_number(c: &mut TokenCursor) -> Result<&'static str, CursorError> {
        c.expect_number()?;
        Ok("number")
    }

    const HANDLERS: [(TokenKind, Handler<&'static str, CursorError>); 2] = [
        (TokenKind::LBrace, name_brace),
        (TokenKind::NumberLit, name_number),
    ];

    #[test]
    fn test_dispatch_on_current() {
        let mut c = cursor(vec![Token::NumberLit(3.0), Token::LBrace, Token::Colon]);
        assert_eq!(c.dispatch_on_current(&HANDLERS), Ok("number"));
        assert_eq!(c.dispatch_on_current(&HANDLERS), Ok("brace"));
        assert_eq!(
            c.dispatch_on_current(&HANDLERS),
            Err(CursorError::UnexpectedToken {
                expected: vec![TokenKind::LBrace, TokenKind::NumberLit],
                found: TokenKind::Colon,
                position: 2,
            })
        );
        assert_eq!(c.position(), 2);
        c.expect(TokenKind::Colon).expect("colon is current");
        assert_eq!(
            c.dispatch_on_current(&HANDLERS),
            Err(CursorError::UnexpectedEndOfInput { position: 3 })
        );
    }

    #[test]
    fn test_error_display() {
        let err = CursorError::UnexpectedToken {
            expected: vec![TokenKind::Comma, TokenKind::RBracket],
            found: TokenKind::Colon,
            position: 4,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected token ':' at token 4, expected ',' or ']'"
        );
        let err = CursorError::UnexpectedEndOfInput { position: 0 };
        assert_eq!(err.to_string(), "Unexpected end of input at token 0");
    }
}
