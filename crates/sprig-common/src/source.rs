//! Loading markup into memory.
//!
//! The parser never performs its own I/O: it needs the whole document resident
//! and free of NUL characters so that end of input is unambiguous. This module
//! is the one place that turns a file into such a buffer.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reasons a file cannot be handed to the parser.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file contains a NUL byte, which would make end of input ambiguous.
    #[error("{} contains a NUL byte at offset {offset}", path.display())]
    ContainsNul {
        /// File that was being read.
        path: PathBuf,
        /// Byte offset of the first NUL.
        offset: usize,
    },

    /// The file is not valid UTF-8.
    #[error("{} is not valid UTF-8 (first invalid byte at offset {offset})", path.display())]
    InvalidUtf8 {
        /// File that was being read.
        path: PathBuf,
        /// Length of the valid prefix.
        offset: usize,
    },
}

/// Read a whole file into a string suitable for parsing.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read, contains a NUL byte,
/// or is not valid UTF-8.
pub fn load(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} bytes from {}", bytes.len(), path.display());
    from_bytes(path, bytes)
}

/// Validate an in-memory buffer the same way [`load`] validates a file.
///
/// `origin` is only used in error messages.
///
/// # Errors
///
/// Returns [`LoadError::ContainsNul`] or [`LoadError::InvalidUtf8`].
pub fn from_bytes(origin: impl AsRef<Path>, bytes: Vec<u8>) -> Result<String, LoadError> {
    if let Some(offset) = bytes.iter().position(|&b| b == 0) {
        return Err(LoadError::ContainsNul {
            path: origin.as_ref().to_path_buf(),
            offset,
        });
    }
    String::from_utf8(bytes).map_err(|e| LoadError::InvalidUtf8 {
        path: origin.as_ref().to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })
}
