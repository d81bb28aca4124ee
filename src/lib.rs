//! Small general-purpose helper library: recursive filesystem tree
//! operations (`fs_op`) and miscellaneous string/value utilities (`util`).
//!
//! All filesystem operations are synchronous and blocking, hold no state
//! across calls, and perform no internal locking. Callers that operate on
//! overlapping subtrees concurrently must serialize access externally.

pub mod fs_op;
pub mod util;

pub use crate::fs_op::copy::{copy_tree, CopyReport};
pub use crate::fs_op::error::FsOpError;
pub use crate::fs_op::extract::{extract_archive, ExtractReport};
pub use crate::fs_op::list::{list_files, list_files_relative};
pub use crate::fs_op::remove::remove_tree;
