use anyhow::Result;
use async_trait::async_trait;
use std::fs::FileType;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                entries.push(FsEntry {
                    path: entry.path(),
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind: entry_kind(entry.file_type()?),
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn stat(&self, path: &Path) -> Result<EntryKind> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(entry_kind(metadata.file_type()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn lists_children_with_their_kinds() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("a.txt"), "content").unwrap();

        let mut entries = RealFileSystem.read_dir(temp.path()).await.unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let kinds: Vec<(&str, EntryKind)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![("a.txt", EntryKind::File), ("sub", EntryKind::Directory)]
        );
        assert_eq!(entries[1].path, temp.path().join("sub"));
    }

    #[tokio::test]
    async fn listing_a_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "content").unwrap();

        assert!(RealFileSystem.read_dir(&file).await.is_err());
        assert_eq!(RealFileSystem.stat(&file).await.unwrap(), EntryKind::File);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinks_are_reported_unresolved_in_listings() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("target")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("target"), temp.path().join("link")).unwrap();

        let entries = RealFileSystem.read_dir(temp.path()).await.unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert_eq!(link.kind, EntryKind::Symlink);

        let followed = RealFileSystem.stat(&temp.path().join("link")).await.unwrap();
        assert_eq!(followed, EntryKind::Directory);
    }
}
