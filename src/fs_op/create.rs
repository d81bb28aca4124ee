use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Create (or overwrite) a file at `path` with the given contents.
///
/// Missing parent directories are created first. Pass an empty slice to
/// create an empty file.
pub fn create_file<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), FsOpError> {
    let p = path.as_ref();
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(p, contents)?;
    Ok(())
}

/// Create a directory and all of its missing parents.
///
/// An already-existing directory is a success, so the call is idempotent.
pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Create a directory tree and set the unix permission bits on the final
/// component, whether it was just created or already existed.
#[cfg(unix)]
pub fn create_dir_all_with_mode<P: AsRef<Path>>(path: P, mode: u32) -> Result<(), FsOpError> {
    use std::os::unix::fs::PermissionsExt;

    let p = path.as_ref();
    fs::create_dir_all(p)?;
    fs::set_permissions(p, fs::Permissions::from_mode(mode))?;
    Ok(())
}
