use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fs_extra::file::{copy as file_copy, CopyOptions};
use walkdir::WalkDir;

use crate::fs_op::error::FsOpError;

/// Outcome of a [`copy_tree`] call.
///
/// The walk is best-effort: a file that cannot be copied does not abort the
/// remaining entries. Such failures end up in `failures` so callers can
/// inspect them instead of having them silently swallowed.
#[derive(Debug, Default)]
pub struct CopyReport {
    /// Number of regular files copied.
    pub files: u64,
    /// Number of directories created under the destination.
    pub dirs: u64,
    /// Source paths that could not be mirrored, with the error for each.
    pub failures: Vec<(PathBuf, io::Error)>,
}

impl CopyReport {
    /// `true` when every entry was mirrored successfully.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Recursively mirror the `src` directory tree under `dst`.
///
/// Behaviour:
/// - Empty `src` or `dst` is an error and the filesystem is left untouched.
/// - `dst` (and any missing parents) is created if absent.
/// - Directories are mirrored, regular files are copied with overwrite.
///   Other entry kinds (symlinks, device nodes) are skipped.
/// - A failing entry is logged, recorded in the report and the walk
///   continues; `src` is never modified.
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
) -> Result<CopyReport, FsOpError> {
    let src = src.as_ref();
    let dst = dst.as_ref();

    if src.as_os_str().is_empty() {
        return Err(FsOpError::EmptyPath("source"));
    }
    if dst.as_os_str().is_empty() {
        return Err(FsOpError::EmptyPath("destination"));
    }

    fs::create_dir_all(dst)?;

    let mut report = CopyReport::default();

    for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let at = e.path().unwrap_or(src).to_path_buf();
                tracing::warn!("skipping unreadable entry {}: {}", at.display(), e);
                report.failures.push((at, io::Error::other(e)));
                continue;
            }
        };

        let rel = match entry.path().strip_prefix(src) {
            Ok(rel) => rel,
            // Unreachable for entries yielded under `src`, but walkdir does
            // not encode that in its types.
            Err(e) => {
                report
                    .failures
                    .push((entry.path().to_path_buf(), io::Error::other(e)));
                continue;
            }
        };
        let target = dst.join(rel);

        let result = if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map(|()| report.dirs += 1)
        } else if entry.file_type().is_file() {
            copy_file_overwriting(entry.path(), &target).map(|_| report.files += 1)
        } else {
            continue;
        };

        if let Err(e) = result {
            tracing::warn!(
                "failed to mirror {} -> {}: {}",
                entry.path().display(),
                target.display(),
                e
            );
            report.failures.push((entry.path().to_path_buf(), e));
        }
    }

    Ok(report)
}

/// Copy a single regular file, replacing any existing file at `dst`.
fn copy_file_overwriting(src: &Path, dst: &Path) -> io::Result<u64> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut options = CopyOptions::new();
    options.overwrite = true;
    // 64 KiB buffer balances throughput and memory for file payloads.
    options.buffer_size = 64 * 1024;
    file_copy(src, dst, &options).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_nested_tree_with_identical_contents() {
        let td = tempdir().expect("tempdir");
        let src = td.path().join("src");
        fs::create_dir_all(src.join("a/b")).expect("mkdir");
        fs::write(src.join("top.txt"), b"top").expect("write");
        fs::write(src.join("a/b/deep.txt"), b"deep").expect("write");

        let dst = td.path().join("dst");
        let report = copy_tree(&src, &dst).expect("copy");
        assert!(report.is_complete());
        assert_eq!(report.files, 2);

        assert_eq!(fs::read(dst.join("top.txt")).expect("read"), b"top");
        assert_eq!(fs::read(dst.join("a/b/deep.txt")).expect("read"), b"deep");
    }

    #[test]
    fn overwrites_existing_destination_files() {
        let td = tempdir().expect("tempdir");
        let src = td.path().join("src");
        let dst = td.path().join("dst");
        fs::create_dir_all(&src).expect("mkdir");
        fs::create_dir_all(&dst).expect("mkdir");
        fs::write(src.join("f.txt"), b"new").expect("write");
        fs::write(dst.join("f.txt"), b"old").expect("write");

        copy_tree(&src, &dst).expect("copy");
        assert_eq!(fs::read(dst.join("f.txt")).expect("read"), b"new");
    }

    #[test]
    fn empty_arguments_touch_nothing() {
        let td = tempdir().expect("tempdir");
        let dst = td.path().join("never_created");

        assert!(matches!(
            copy_tree("", &dst),
            Err(FsOpError::EmptyPath("source"))
        ));
        assert!(!dst.exists());

        assert!(matches!(
            copy_tree(td.path(), ""),
            Err(FsOpError::EmptyPath("destination"))
        ));
    }

    // An unreadable subtree must not abort the walk; the readable entries
    // are still mirrored and the failure lands in the report.
    #[cfg(unix)]
    #[test]
    fn unreadable_subtree_is_recorded_and_walk_continues() {
        use std::os::unix::fs::PermissionsExt;

        let td = tempdir().expect("tempdir");
        let src = td.path().join("src");
        let locked = src.join("locked");
        fs::create_dir_all(&locked).expect("mkdir");
        fs::write(src.join("ok.txt"), b"fine").expect("write");
        fs::write(locked.join("hidden.txt"), b"no").expect("write");

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
        // Permission bits do not bind root; nothing to observe in that case.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");
            return;
        }

        let dst = td.path().join("dst");
        let report = copy_tree(&src, &dst).expect("copy");

        assert!(!report.is_complete());
        assert!(!report.failures.is_empty());
        assert_eq!(fs::read(dst.join("ok.txt")).expect("read"), b"fine");
        assert!(!dst.join("locked/hidden.txt").exists());

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod");
    }

    #[test]
    fn source_is_left_untouched() {
        let td = tempdir().expect("tempdir");
        let src = td.path().join("src");
        fs::create_dir_all(&src).expect("mkdir");
        fs::write(src.join("f.txt"), b"data").expect("write");

        copy_tree(&src, td.path().join("dst")).expect("copy");
        assert_eq!(fs::read(src.join("f.txt")).expect("read"), b"data");
    }
}
