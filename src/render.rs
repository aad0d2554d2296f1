/*!
# Renderer

Textual output for token sequences and value trees.

Tokens render back to their source characters, with string literals wrapped
in quotes and numbers written with the default `f64` formatting. Values render
as `{"key": value, ...}` and `[a, b, ...]`.

Neither path escapes string contents, so a string holding a `"` does not
render back to text that lexes to the same value. Use [`Value::to_json`] when
escaped output is needed.

```
use jsonlite::{parse, render_tokens, render_value, tokenize};

let tokens = tokenize(b"[ 1 , -2 ]").unwrap();
assert_eq!(render_tokens(&tokens), "[1,-2]");

let value = parse(b"[ 1 , [ ] , \"x\" ]").unwrap();
assert_eq!(render_value(&value), r#"[1, [], "x"]"#);
```
*/
use anyhow::Context as _;
use colored::Colorize;
use std::fmt::{self, Display};
use std::io::{self, ErrorKind, Write};

use crate::tokenizer::Token;
use crate::value::Value;

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Colon => write!(f, ":"),
            Self::StringLit(text) => write!(f, "\"{text}\""),
            Self::NumberLit(n) => write!(f, "{n}"),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{key}\": {value}")?;
                }
                write!(f, "}}")
            }
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Render a token sequence as text, with no separator between tokens.
#[must_use]
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}

/// Render a value tree as text. Object keys appear in the map's iteration
/// order.
#[must_use]
pub fn render_value(value: &Value) -> String {
    value.to_string()
}

// ==============================================================================
// Terminal Output
// ==============================================================================

/// Write `text` followed by a newline to `writer`.
/// Silently returns `Ok(())` on broken pipe so that piping to tools like
/// `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_rendered<W: Write>(writer: &mut W, text: &str) -> anyhow::Result<()> {
    let result = writeln!(writer, "{text}").and_then(|()| writer.flush());
    handle_broken_pipe(result)
}

/// Write a value with syntax highlighting, followed by a newline. The layout
/// is identical to [`render_value`].
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_colored_value<W: Write>(
    writer: &mut W,
    value: &Value,
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        write_colored(writer, value)?;
        writeln!(writer)?;
        writer.flush()
    })();
    handle_broken_pipe(result)
}

fn handle_broken_pipe(result: io::Result<()>) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write rendered output to stdout"),
    }
}

/// Recursively write a value with syntax highlighting.
fn write_colored<W: Write>(writer: &mut W, value: &Value) -> io::Result<()> {
    match value {
        Value::Number(n) => write!(writer, "{}", n.to_string().yellow()),
        Value::String(s) => {
            write!(writer, "{}", format!("\"{s}\"").green())
        }
        Value::Array(items) => {
            write!(writer, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(writer, ", ")?;
                }
                write_colored(writer, item)?;
            }
            write!(writer, "]")
        }
        Value::Object(map) => {
            write!(writer, "{{")?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    write!(writer, ", ")?;
                }
                write!(writer, "{}: ", format!("\"{key}\"").cyan())?;
                write_colored(writer, item)?;
            }
            write!(writer, "}}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, tokenize};
    use std::collections::HashMap;

    #[test]
    fn test_render_structural_tokens() {
        let tokens = vec![
            Token::LBrace,
            Token::RBrace,
            Token::LBracket,
            Token::RBracket,
            Token::Comma,
            Token::Colon,
        ];
        assert_eq!(render_tokens(&tokens), "{}[],:");
        assert_eq!(render_tokens(&[]), "");
    }

    #[test]
    fn test_render_literal_tokens() {
        assert_eq!(Token::StringLit("a b".into()).to_string(), r#""a b""#);
        assert_eq!(Token::StringLit(r"x\y".into()).to_string(), r#""x\y""#);
        assert_eq!(Token::NumberLit(1.0).to_string(), "1");
        assert_eq!(Token::NumberLit(-0.0).to_string(), "-0");
        assert_eq!(Token::NumberLit(1_000_000.0).to_string(), "1000000");
    }

    #[test]
    fn test_render_tokens_is_idempotent() {
        let input = br#" { "a" : [ 1 , -2 , { } ] , "b" : "c d" } "#;
        let once = render_tokens(&tokenize(input).unwrap());
        assert_eq!(once, r#"{"a":[1,-2,{}],"b":"c d"}"#);
        let twice = render_tokens(&tokenize(once.as_bytes()).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render_value(&Value::Number(3.0)), "3");
        assert_eq!(render_value(&Value::Number(-12.0)), "-12");
        assert_eq!(render_value(&Value::String("hi".into())), r#""hi""#);
    }

    #[test]
    fn test_render_containers() {
        assert_eq!(render_value(&Value::Object(HashMap::new())), "{}");
        assert_eq!(render_value(&Value::Array(vec![])), "[]");
        assert_eq!(render_value(&parse(b"[1,2,3]").unwrap()), "[1, 2, 3]");
        assert_eq!(
            render_value(&parse(br#"{"a": [{}, "x"]}"#).unwrap()),
            r#"{"a": [{}, "x"]}"#
        );
    }

    #[test]
    fn test_render_object_entries() {
        let rendered = render_value(&parse(br#"{"a": 1, "b": 2}"#).unwrap());
        assert!(
            rendered == r#"{"a": 1, "b": 2}"# || rendered == r#"{"b": 2, "a": 1}"#,
            "unexpected rendering {rendered}"
        );
    }

    #[test]
    fn test_render_round_trip() {
        let inputs: [&[u8]; 5] = [
            b"{}",
            b"[1,2,3]",
            br#"{"a": 1, "b": [2, "x"]}"#,
            br#"[{"k": {"n": [-5, [], {}]}}, "s", 0]"#,
            br#"{"a": 1, "a": 2, "c": {"d": ["e"]}}"#,
        ];
        for input in inputs {
            let value = parse(input).unwrap();
            let rendered = render_value(&value);
            assert_eq!(parse(rendered.as_bytes()).unwrap(), value, "{rendered}");
        }
    }

    #[test]
    fn test_write_colored_matches_plain_layout() {
        colored::control::set_override(false);
        let value = parse(br#"[1, "two", {"k": []}]"#).unwrap();
        let mut out = Vec::new();
        write_colored_value(&mut out, &value).unwrap();
        let expected = format!("{}\n", render_value(&value));
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_broken_pipe_is_not_an_error() {
        assert!(write_rendered(&mut BrokenPipe, "[]").is_ok());
        assert!(write_colored_value(&mut BrokenPipe, &Value::Array(vec![])).is_ok());
    }
}
