//! # Lexer
//!
//! Scans an input byte sequence into a sequence of [`Token`]s.
//!
//! The accepted lexical grammar is deliberately narrower than standard JSON:
//! string literals are taken verbatim (no escape sequences), and numbers are
//! non-negative digit sequences with an optional leading `-`.
use std::error::Error;
use std::fmt;

use log::{debug, trace};

use crate::tokenizer::Token;

/// Represents errors that can occur while tokenizing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The input ended inside a string literal.
    UnterminatedString {
        /// Byte offset of the opening quote
        start: usize,
    },
    /// A byte that does not start any token.
    InvalidCharacter {
        /// The offending character (lossily decoded)
        found: char,
        /// Byte offset of the offending character
        position: usize,
    },
}

impl Error for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString { start } => {
                write!(f, "Unterminated string starting at byte {start}")
            }
            Self::InvalidCharacter { found, position } => {
                write!(f, "Invalid character {found:?} at byte {position}")
            }
        }
    }
}

/// A lexer that turns an input slice of bytes into tokens.
struct Lexer<'a> {
    /// The input sequence of bytes to tokenize
    input: &'a [u8],
    /// Current position (current byte)
    position: usize,
    /// Current reading position (after current byte)
    read_position: usize,
    /// Current byte under examination, `None` once the input is exhausted
    byte: Option<u8>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a [u8]) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            byte: None,
        };
        // put the lexer in an initial working state
        lexer.read_byte();
        lexer
    }

    /// Reads and consumes the next byte in the input sequence.
    fn read_byte(&mut self) {
        self.byte = self.input.get(self.read_position).copied();
        // Advance the positions
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Consume whitespace byte(s) starting from the current position.
    fn skip_whitespace(&mut self) {
        while matches!(self.byte, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_byte();
        }
    }

    /// Consumes a single-byte token and returns it.
    fn single(&mut self, token: Token) -> Token {
        self.read_byte();
        token
    }

    /// Returns the next token from the current position, or `None` at the end
    /// of the input.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(byte) = self.byte else {
            return Ok(None);
        };

        let token = match byte {
            b'{' => self.single(Token::LBrace),
            b'}' => self.single(Token::RBrace),
            b'[' => self.single(Token::LBracket),
            b']' => self.single(Token::RBracket),
            b',' => self.single(Token::Comma),
            b':' => self.single(Token::Colon),
            b'"' => self.read_string()?,
            b'-' | b'0'..=b'9' => self.read_number(),
            _ => {
                return Err(LexError::InvalidCharacter {
                    found: self.char_at(self.position),
                    position: self.position,
                });
            }
        };

        Ok(Some(token))
    }

    /// Reads a string literal. Every byte up to the closing quote is taken
    /// verbatim; a backslash has no special meaning.
    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        // Skip opening quote
        self.read_byte();
        let text_start = self.position;

        while let Some(byte) = self.byte {
            if byte == b'"' {
                let text = String::from_utf8_lossy(
                    &self.input[text_start..self.position],
                )
                .into_owned();
                // Skip closing quote
                self.read_byte();
                return Ok(Token::StringLit(text));
            }
            self.read_byte();
        }

        Err(LexError::UnterminatedString { start })
    }

    /// Reads an optionally negated run of decimal digits.
    ///
    /// A `-` with no digits after it reads as `-0`. Any digit may come first,
    /// including `0`, so `007` reads as `7`.
    ///
    /// Digits accumulate as `value * 10 + digit`, rounding after the multiply
    /// and again after the add; a fused multiply-add gives different results
    /// past 2^53.
    #[allow(clippy::suboptimal_flops)]
    fn read_number(&mut self) -> Token {
        let negative = self.byte == Some(b'-');
        if negative {
            self.read_byte();
        }

        let mut value = 0.0_f64;
        while let Some(digit @ b'0'..=b'9') = self.byte {
            value = value * 10.0 + f64::from(digit - b'0');
            self.read_byte();
        }

        Token::NumberLit(if negative { -value } else { value })
    }

    /// Decodes the character starting at `position` for error reporting.
    fn char_at(&self, position: usize) -> char {
        let end = self.input.len().min(position + 4);
        String::from_utf8_lossy(&self.input[position..end])
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Tokenize a document from bytes into a sequence of tokens.
///
/// Whitespace between tokens is skipped. Empty input yields an empty
/// sequence.
///
/// # Errors
///
/// Returns a [`LexError`] on the first byte that cannot start a token, or if
/// the input ends inside a string literal.
pub fn tokenize(text: &[u8]) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(text);
    let mut tokens: Vec<Token> = vec![];

    while let Some(token) = lexer.next_token()? {
        trace!("token {}: {token:?}", tokens.len());
        tokens.push(token);
    }

    debug!("tokenized {} bytes into {} tokens", text.len(), tokens.len());
    Ok(tokens)
}
