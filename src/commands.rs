//! Subcommand implementations for the `jl` binary.
//!
//! Each command writes to a caller-supplied writer so it can be exercised
//! without a terminal.
pub mod generate;
pub mod input;
pub mod parse;
pub mod tokenize;
