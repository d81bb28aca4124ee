//! Miscellaneous pure utilities: string case conversion, client IP
//! resolution, random identifier generation, flat-list-to-tree conversion
//! and small formatting helpers. None of these touch the filesystem.

pub mod case;
pub mod format;
pub mod ip;
pub mod random;
pub mod tree;

pub use case::{camelize, decamelize};
pub use format::{format_bytes, storage_category};
pub use ip::resolve_client_ip;
pub use random::{pseudo_uuid, random_string, CharClass};
pub use tree::list_to_tree;
