use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::fs_op::error::FsOpError;
use crate::fs_op::stat::PathType;

/// Recursively delete everything under `path`.
///
/// Behaviour:
/// - A missing `path` is a no-op success, so callers can attempt removal
///   without checking for existence first.
/// - A regular file is unlinked regardless of `remove_root`.
/// - For a directory, all descendants are deleted depth-first; `path`
///   itself is removed only when `remove_root` is true, otherwise it is
///   left in place as an empty directory.
/// - Entries that cannot be deleted are logged and counted; the walk
///   continues and the call then fails with [`FsOpError::Partial`] (or the
///   root `rmdir` error, which a leftover entry makes inevitable).
///
/// Deletion is irreversible; there is no trash or undo.
pub fn remove_tree<P: AsRef<Path>>(path: P, remove_root: bool) -> Result<(), FsOpError> {
    let path = path.as_ref();

    match PathType::of(path) {
        PathType::NotFound => return Ok(()),
        PathType::Directory => {}
        PathType::File | PathType::Other => {
            fs::remove_file(path)?;
            return Ok(());
        }
    }

    let mut failed = 0usize;

    // contents_first yields children before their parent directory, so every
    // directory is empty by the time its own removal is attempted.
    for entry in WalkDir::new(path)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry during removal: {}", e);
                failed += 1;
                continue;
            }
        };

        let result = if entry.file_type().is_dir() {
            fs::remove_dir(entry.path())
        } else {
            fs::remove_file(entry.path())
        };

        if let Err(e) = result {
            tracing::warn!("failed to delete {}: {}", entry.path().display(), e);
            failed += 1;
        }
    }

    if remove_root {
        // Fails with a plain io error when leftovers kept it non-empty.
        fs::remove_dir(path)?;
    }

    if failed > 0 {
        return Err(FsOpError::Partial {
            root: path.to_path_buf(),
            failed,
        });
    }

    Ok(())
}
