//! Error types for sociogram construction.
//!
//! Any failure while reading or parsing the two source files is fatal for
//! the attempted build: the caller gets a `ParseError` and no graph value.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Error, Debug)]
pub enum ParseError {
    /// A source file could not be opened or read.
    #[error("cannot read {path:?}: {source}")]
    SourceUnavailable { path: PathBuf, source: io::Error },

    /// The roster lists the same name twice.
    #[error("duplicate name \"{name}\" in the roster (line {line})")]
    DuplicateName { name: String, line: usize },

    /// The likes list mentions a name missing from the roster.
    #[error("unknown name \"{name}\" in the likes list (line {line})")]
    UnknownVertex { name: String, line: usize },
}

impl ParseError {
    /// Wraps an I/O failure together with the path that produced it.
    pub fn io(path: &Path, source: io::Error) -> Self {
        ParseError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }
}
