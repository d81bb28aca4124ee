use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filesystem operation helpers in this module tree.
///
/// Per-entry failures inside a recursive walk are deliberately *not* mapped
/// to individual variants: the tree operations continue past them and report
/// an aggregate (`Partial`) or expose them through their report structs.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required path argument was empty.
    #[error("{0} path must be non-empty")]
    EmptyPath(&'static str),

    /// The path exists but is not a regular file (or does not exist at all).
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    /// The archive could not be opened or read.
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Some entries under `root` could not be processed during a recursive
    /// walk that otherwise ran to completion.
    #[error("{failed} entries under `{root}` could not be processed")]
    Partial { root: PathBuf, failed: usize },
}
