use std::fs;
use std::path::Path;

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (socket, FIFO, dangling symlink, device node, ...).
    Other,
}

impl PathType {
    /// Classify `path`, following symlinks to their target's kind.
    ///
    /// A symlink whose target is gone still owns a directory entry, so it
    /// classifies as `Other` rather than `NotFound`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        match fs::metadata(p) {
            Ok(md) if md.is_dir() => PathType::Directory,
            Ok(md) if md.is_file() => PathType::File,
            Ok(_) => PathType::Other,
            Err(_) => match fs::symlink_metadata(p) {
                Ok(_) => PathType::Other,
                Err(_) => PathType::NotFound,
            },
        }
    }
}

/// Return `true` if `path` exists.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) != PathType::NotFound
}

/// Return `true` if `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

/// Return `true` if `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}
