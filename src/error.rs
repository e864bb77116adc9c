//! Error types for fyle.
//!
//! Filesystem failures ([FsError]) and invalid navigation requests ([NavError]) are kept apart,
//! and both fold into the crate-wide [Error] used by the navigation operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a filesystem provider.
#[derive(Debug, Error)]
pub enum FsError {
    /// The directory could not be listed (missing, not a directory, permission denied).
    #[error("cannot read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The hidden/system attribute of an entry could not be queried.
    #[error("cannot query attributes of {path:?}: {source}")]
    Attributes {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot rename {from:?} to {to:?}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("home directory could not be resolved")]
    HomeDir,
}

/// Navigation requests that do not fit the current state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("no entry is selected")]
    NoSelection,

    #[error("entry index {index} is out of range ({len} entries)")]
    InvalidIndex { index: usize, len: usize },

    #[error("{name:?} is not a valid entry name")]
    InvalidName { name: String },
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Filesystem(#[from] FsError),

    #[error(transparent)]
    Navigation(#[from] NavError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
