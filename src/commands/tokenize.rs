//! `tokenize` subcommand.
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

use crate::render::{render_tokens, write_rendered};
use crate::tokenizer::tokenize;

/// Tokenize `input` and write the rendered token sequence to `writer`. With
/// `count`, a `Tokens: N` line is written first.
///
/// # Errors
///
/// Returns an error if the input cannot be tokenized or the output cannot be
/// written.
pub fn run<W: Write>(writer: &mut W, input: &[u8], count: bool) -> Result<()> {
    let tokens = tokenize(input).context("Failed to tokenize input")?;
    info!("read {} tokens", tokens.len());

    if count {
        write_rendered(writer, &format!("Tokens: {}", tokens.len()))?;
    }
    write_rendered(writer, &render_tokens(&tokens))
}
