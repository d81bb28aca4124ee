use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::fs_op::stat;

/// Recursively collect every regular file reachable under `path`.
///
/// Returns full paths in directory-enumeration order, which is filesystem
/// dependent and not sorted; callers that need deterministic output should
/// sort at their boundary. If `path` is not a directory (including a path
/// that does not exist) it is returned as the single element, the terminal
/// case of the recursion.
///
/// Unreadable subtrees are skipped with a warning rather than failing the
/// whole enumeration.
pub fn list_files<P: AsRef<Path>>(path: P) -> Vec<PathBuf> {
    let path = path.as_ref();

    if !stat::is_dir(path) {
        return vec![path.to_path_buf()];
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).min_depth(1).follow_links(false) {
        match entry {
            Ok(e) if e.file_type().is_file() => files.push(e.into_path()),
            Ok(_) => {}
            Err(e) => tracing::warn!("skipping unreadable entry during listing: {}", e),
        }
    }
    files
}

/// Like [`list_files`], but keyed by the path relative to `path`.
///
/// Useful for comparing two trees: equal key sets mean equal shapes. Keys
/// use the platform separator as produced by the walk.
pub fn list_files_relative<P: AsRef<Path>>(path: P) -> BTreeMap<String, PathBuf> {
    let base = path.as_ref();
    let mut map = BTreeMap::new();
    for file in list_files(base) {
        let key = file
            .strip_prefix(base)
            .unwrap_or(&file)
            .to_string_lossy()
            .into_owned();
        map.insert(key, file);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_all_regular_files_at_any_depth() {
        let td = tempdir().expect("tempdir");
        fs::create_dir_all(td.path().join("a/b")).expect("mkdir");
        fs::create_dir_all(td.path().join("empty")).expect("mkdir");
        fs::write(td.path().join("top.txt"), b"").expect("write");
        fs::write(td.path().join("a/mid.txt"), b"").expect("write");
        fs::write(td.path().join("a/b/deep.txt"), b"").expect("write");

        let got: BTreeSet<PathBuf> = list_files(td.path()).into_iter().collect();
        let want: BTreeSet<PathBuf> = ["top.txt", "a/mid.txt", "a/b/deep.txt"]
            .iter()
            .map(|p| td.path().join(p))
            .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn single_file_is_its_own_listing() {
        let td = tempdir().expect("tempdir");
        let f = td.path().join("only.txt");
        fs::write(&f, b"x").expect("write");

        assert_eq!(list_files(&f), vec![f]);
    }

    #[test]
    fn directories_are_not_listed() {
        let td = tempdir().expect("tempdir");
        fs::create_dir_all(td.path().join("just/dirs/here")).expect("mkdir");

        assert!(list_files(td.path()).is_empty());
    }

    #[test]
    fn relative_listing_strips_the_base() {
        let td = tempdir().expect("tempdir");
        fs::create_dir_all(td.path().join("a")).expect("mkdir");
        fs::write(td.path().join("a/f.txt"), b"x").expect("write");

        let map = list_files_relative(td.path());
        assert_eq!(map.len(), 1);
        let (key, full) = map.iter().next().expect("entry");
        assert_eq!(key, &format!("a{}f.txt", std::path::MAIN_SEPARATOR));
        assert_eq!(full, &td.path().join("a/f.txt"));
    }
}
