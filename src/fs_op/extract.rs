use std::fs;
use std::io;
use std::path::Path;

use crate::fs_op::error::FsOpError;
use crate::fs_op::stat;

/// Outcome of an [`extract_archive`] call.
#[derive(Debug, Default)]
pub struct ExtractReport {
    /// Entries written under the destination (files and directories).
    pub extracted: u64,
    /// Entries skipped because their name matched an exclusion prefix.
    pub excluded: u64,
    /// Entries skipped because their name would escape the destination.
    pub unsafe_names: u64,
}

/// Extract a zip archive at `archive` into `dest`, then delete the archive.
///
/// Entries whose archive-relative name (forward-slash separated) starts with
/// any member of `exclude_prefixes` are skipped; the match is a literal
/// prefix comparison, not a glob. Intermediate directories are created as
/// needed. Entry names that would resolve outside `dest` are skipped with a
/// warning and counted in the report.
///
/// The archive file is removed only after every remaining entry has been
/// written, so a failure return leaves the archive on disk untouched
/// (already-written entries under `dest` are not rolled back).
pub fn extract_archive<P, Q, S>(
    archive: P,
    dest: Q,
    exclude_prefixes: &[S],
) -> Result<ExtractReport, FsOpError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<str>,
{
    let archive = archive.as_ref();
    let dest = dest.as_ref();

    if !stat::is_file(archive) {
        return Err(FsOpError::NotAFile(archive.to_path_buf()));
    }

    let mut report = ExtractReport::default();
    {
        let file = fs::File::open(archive)?;
        let mut zip = zip::ZipArchive::new(file)?;

        for index in 0..zip.len() {
            let mut entry = zip.by_index(index)?;

            if exclude_prefixes
                .iter()
                .any(|p| entry.name().starts_with(p.as_ref()))
            {
                tracing::debug!("excluding archive entry {}", entry.name());
                report.excluded += 1;
                continue;
            }

            // Guard against zip-slip: only extract names that stay inside
            // the destination once joined.
            let relative = match entry.enclosed_name() {
                Some(p) => p.to_path_buf(),
                None => {
                    tracing::warn!("skipping unsafe archive entry name {}", entry.name());
                    report.unsafe_names += 1;
                    continue;
                }
            };
            let target = dest.join(relative);

            if entry.is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut out = fs::File::create(&target)?;
                io::copy(&mut entry, &mut out)?;

                #[cfg(unix)]
                if let Some(mode) = entry.unix_mode() {
                    use std::os::unix::fs::PermissionsExt;
                    fs::set_permissions(&target, fs::Permissions::from_mode(mode))?;
                }
            }
            report.extracted += 1;
        }
    }

    // Everything that should exist now does; dropping the handle above means
    // the archive file is free to delete.
    fs::remove_file(archive)?;
    Ok(report)
}
