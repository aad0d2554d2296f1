//! # Token
//!
//! Defines the possible tokens produced from a document byte sequence.
use std::fmt::Display;

/// Represents a token from a document.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /* Delimiters */
    /// Opening curly brace
    LBrace,

    /// Closing curly brace
    RBrace,

    /// Opening square bracket
    LBracket,

    /// Closing square bracket
    RBracket,

    /// Comma character
    Comma,

    /// Colon character
    Colon,

    /* Values */
    /// String literal, holding the raw text between the quotes
    StringLit(String),

    /// Numeric literal
    NumberLit(f64),
}

impl Token {
    /// Returns the payload-free kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::LBracket => TokenKind::LBracket,
            Self::RBracket => TokenKind::RBracket,
            Self::Comma => TokenKind::Comma,
            Self::Colon => TokenKind::Colon,
            Self::StringLit(_) => TokenKind::StringLit,
            Self::NumberLit(_) => TokenKind::NumberLit,
        }
    }
}

/// The kind of a [`Token`], without its payload.
///
/// Used by the parser's cursor to request a token of a given kind and to
/// report what was expected versus what was found.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// A string literal
    StringLit,
    /// A number literal
    NumberLit,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Comma => write!(f, "','"),
            Self::Colon => write!(f, "':'"),
            Self::StringLit => write!(f, "string"),
            Self::NumberLit => write!(f, "number"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ignores_payload() {
        assert_eq!(Token::StringLit("a".into()).kind(), TokenKind::StringLit);
        assert_eq!(
            Token::StringLit(String::new()).kind(),
            Token::StringLit("other".into()).kind()
        );
        assert_eq!(Token::NumberLit(-0.0).kind(), TokenKind::NumberLit);
        assert_eq!(Token::Colon.kind(), TokenKind::Colon);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::LBrace.to_string(), "'{'");
        assert_eq!(TokenKind::RBrace.to_string(), "'}'");
        assert_eq!(TokenKind::StringLit.to_string(), "string");
    }
}
