//! `parse` subcommand.
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

use crate::render::{render_value, write_colored_value, write_rendered};

/// Options controlling how a document is parsed and displayed.
#[derive(Debug, Default, Clone, Copy)]
#[allow(clippy::struct_excessive_bools)]
pub struct ParseOptions {
    /// Reject tokens after the first complete value
    pub strict: bool,
    /// Emit standard escaped JSON instead of the plain rendering
    pub json: bool,
    /// Print a `Depth: N` line before the value
    pub depth: bool,
    /// Do not print the value itself
    pub no_display: bool,
    /// Highlight the plain rendering with ANSI colors
    pub color: bool,
}

/// Parse `input` and write the value tree to `writer`.
///
/// # Errors
///
/// Returns an error if the input is not a valid document or the output
/// cannot be written.
pub fn run<W: Write>(
    writer: &mut W,
    input: &[u8],
    options: &ParseOptions,
) -> Result<()> {
    let value = if options.strict {
        crate::parse_strict(input)
    } else {
        crate::parse(input)
    }
    .context("Failed to parse input")?;
    info!("parsed {} of depth {}", value.kind_name(), value.depth());

    if options.depth {
        write_rendered(writer, &format!("Depth: {}", value.depth()))?;
    }

    if options.no_display {
        return Ok(());
    }

    if options.json {
        let json = value.to_json().context("Failed to serialize value")?;
        write_rendered(writer, &json)
    } else if options.color {
        write_colored_value(writer, &value)
    } else {
        write_rendered(writer, &render_value(&value))
    }
}
