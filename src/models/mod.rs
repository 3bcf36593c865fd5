mod config;
mod entry;
mod tree;

pub use config::{Config, DEFAULT_NESTING, ErrorMode};
pub use entry::{EntryKind, FsEntry};
pub use tree::{DirTree, TreeNode};
