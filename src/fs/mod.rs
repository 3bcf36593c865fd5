mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Immediate children of `dir`, in the order the filesystem yields them.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Kind of `path`, following symlinks.
    async fn stat(&self, path: &Path) -> Result<EntryKind>;
}
