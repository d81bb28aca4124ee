//! Filesystem operation helpers.
//!
//! Each operation lives in its own focused submodule and shares the
//! [`error::FsOpError`] failure type. The recursive operations (`copy`,
//! `remove`, `list`) all traverse with `walkdir`, which never yields the
//! `.`/`..` self and parent entries and does not follow symlinks unless
//! asked to.

pub mod copy;
pub mod create;
pub mod error;
pub mod extract;
pub mod list;
pub mod remove;
pub mod stat;

pub use copy::{copy_tree, CopyReport};
pub use create::{create_dir_all, create_file};
pub use error::FsOpError;
pub use extract::{extract_archive, ExtractReport};
pub use list::{list_files, list_files_relative};
pub use remove::remove_tree;
pub use stat::{exists, is_dir, is_file, PathType};
