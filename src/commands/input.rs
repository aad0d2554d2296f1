//! Loading the raw input document.
use anyhow::{Context, Result};
use log::debug;
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

/// The bytes of an input document, either memory-mapped from a file or read
/// into a buffer.
#[derive(Debug)]
pub enum Input {
    /// A memory-mapped, non-empty file
    Mapped(Mmap),
    /// Bytes read from a stream (or an empty file)
    Buffered(Vec<u8>),
}

impl Input {
    /// Memory-map the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or mapped.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();

        // Mapping a zero-length file fails on some platforms.
        if len == 0 {
            return Ok(Self::Buffered(vec![]));
        }

        // SAFETY: the mapping is only read, and only for the lifetime of
        // this process's single command invocation.
        let map = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to map {}", path.display()))?;
        debug!("mapped {len} bytes from {}", path.display());
        Ok(Self::Mapped(map))
    }

    /// Read `reader` to the end.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buffer = vec![];
        reader
            .read_to_end(&mut buffer)
            .context("Failed to read input")?;
        debug!("read {} bytes of input", buffer.len());
        Ok(Self::Buffered(buffer))
    }
}

impl Deref for Input {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Mapped(map) => map.as_ref(),
            Self::Buffered(buffer) => buffer.as_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"a": [1]}"#).unwrap();
        let input = Input::from_path(file.path()).unwrap();
        assert!(matches!(input, Input::Mapped(_)));
        assert_eq!(&*input, br#"{"a": [1]}"#);
    }

    #[test]
    fn test_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let input = Input::from_path(file.path()).unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_path(Path::new("does/not/exist.json"))
            .expect_err("file does not exist");
        assert!(err.to_string().starts_with("Failed to open"));
    }

    #[test]
    fn test_from_reader() {
        let input = Input::from_reader(&b"[1, 2]"[..]).unwrap();
        assert_eq!(&*input, b"[1, 2]");
    }
}
