//! # Tokenizer/ Lexer
//!
//! Turns an input sequence of bytes from a document into a token sequence.
pub mod lexer;
pub mod token;

// Re-exports
pub use lexer::{LexError, tokenize};
pub use token::{Token, TokenKind};
