//! # Program Image Loader
//!
//! Parses the line-oriented text encoding of a Micro-8 program: one
//! instruction byte per line, written as an 8-character binary number, with
//! `#` starting a comment that runs to the end of the line. Blank lines and
//! comment-only lines are skipped. Sequential bytes land at addresses 0, 1,
//! 2, ...
//!
//! ```text
//! # print the number 8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```
//!
//! The loader's only contract with the execution engine is to produce a
//! byte image the engine installs before the first fetch cycle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::memory::MEMORY_SIZE;

/// Errors that can occur while reading or parsing a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the program file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A non-blank line did not parse as an 8-bit binary number.
    #[error("line {line}: {text:?} is not an 8-bit binary value")]
    InvalidByte {
        /// 1-based line number in the program text.
        line: usize,
        /// The offending text, comments and surrounding whitespace removed.
        text: String,
    },

    /// The image holds more bytes than the machine has memory cells.
    #[error("program is {len} bytes but memory holds only 256")]
    TooLarge {
        /// Number of bytes in the parsed image.
        len: usize,
    },
}

/// Parses program text into a byte image.
///
/// # Examples
///
/// ```
/// use micro8::loader;
///
/// let image = loader::parse("10000010 # LDI R0,8\n00000000\n00001000\n").unwrap();
/// assert_eq!(image, vec![0b1000_0010, 0, 8]);
/// ```
pub fn parse(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();

    for (number, raw) in source.lines().enumerate() {
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let byte = u8::from_str_radix(text, 2).map_err(|_| LoadError::InvalidByte {
            line: number + 1,
            text: text.to_string(),
        })?;
        image.push(byte);
    }

    if image.len() > MEMORY_SIZE {
        return Err(LoadError::TooLarge { len: image.len() });
    }

    Ok(image)
}

/// Reads and parses the program file at `path`.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&source)
}
