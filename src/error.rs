//! Error taxonomy for the scan pipeline.
//!
//! Discovery and file-read failures are recovered during the scan and end up
//! as skipped entries; `Configuration` aborts before any traversal starts.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// A directory could not be listed; its subtree is excluded.
    #[error("cannot read directory {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A file could not be read or decoded; it contributes zero matches.
    #[error("cannot read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Bad user input: missing scan root, empty flag list, broken manifest.
    #[error("{0}")]
    Configuration(String),
}
