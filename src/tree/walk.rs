use std::path::Path;

use anyhow::Context;

use crate::fs::FileSystem;
use crate::models::{Config, DirTree, EntryKind, ErrorMode, FsEntry, TreeNode};

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Levels at or beyond this one are never listed (None means unlimited).
    pub max_depth: Option<usize>,
    /// Whether to show hidden files (starting with '.').
    pub show_hidden: bool,
    /// Whether a listing failure aborts the walk or is recorded on the node.
    pub error_mode: ErrorMode,
}

impl WalkOptions {
    /// Whether the directory at `level` may be listed.
    pub fn can_traverse(&self, level: usize) -> bool {
        match self.max_depth {
            Some(max) => level < max,
            None => true,
        }
    }

    fn keeps(&self, entry: &FsEntry) -> bool {
        self.show_hidden || !entry.is_hidden()
    }
}

impl From<&Config> for WalkOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_depth: config.max_depth,
            show_hidden: config.show_hidden,
            error_mode: config.error_mode,
        }
    }
}

/// Outcome of a walk.
#[derive(Debug)]
pub struct Walk {
    /// Everything visited. After an abort this ends at the failing directory.
    pub tree: DirTree,
    /// The failure that stopped an `ErrorMode::Abort` walk.
    pub aborted: Option<anyhow::Error>,
}

/// Children of one directory plus the deepest level listed beneath it.
#[derive(Default)]
struct Listing {
    error: Option<String>,
    children: Vec<TreeNode>,
    deepest: Option<usize>,
}

/// A listing cut short by a failure somewhere beneath it.
struct Aborted {
    partial: Listing,
    error: anyhow::Error,
}

/// Walk the tree rooted at `root`.
///
/// The root is level 0 and is stat'ed first: a missing root is an error, and a
/// root that is not a directory produces a tree without children. With
/// `ErrorMode::Abort` the first listing failure ends the walk; the entries
/// visited up to and including the failing directory are kept in the tree.
pub async fn walk_dir<F: FileSystem>(
    fs: &F,
    root: &Path,
    options: &WalkOptions,
) -> anyhow::Result<Walk> {
    let kind = fs
        .stat(root)
        .await
        .with_context(|| format!("{}", root.display()))?;

    let (listing, aborted) = if kind == EntryKind::Directory {
        match walk_level(fs, root, options, 0).await {
            Ok(listing) => (listing, None),
            Err(Aborted { partial, error }) => (partial, Some(error)),
        }
    } else {
        log::debug!("{} is not a directory, nothing to list", root.display());
        (Listing::default(), None)
    };

    let tree = DirTree {
        root: root.display().to_string(),
        error: listing.error,
        children: listing.children,
        max_level_reached: listing.deepest.unwrap_or(0),
    };
    Ok(Walk { tree, aborted })
}

async fn walk_level<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &WalkOptions,
    level: usize,
) -> Result<Listing, Aborted> {
    if !options.can_traverse(level) {
        return Ok(Listing::default());
    }

    log::debug!("listing {} at level {level}", dir.display());
    let entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) => {
            let failed = Listing {
                deepest: Some(level),
                ..Listing::default()
            };
            return match options.error_mode {
                ErrorMode::Abort => Err(Aborted {
                    partial: failed,
                    error: err.context(format!("cannot list {}", dir.display())),
                }),
                ErrorMode::Continue => {
                    log::warn!("skipping {}: {err:#}", dir.display());
                    Ok(Listing {
                        error: Some(format!("{err:#}")),
                        ..failed
                    })
                }
            };
        }
    };

    let next_level = level + 1;
    let mut deepest = level;
    let mut children = Vec::new();

    for entry in entries.into_iter().filter(|entry| options.keeps(entry)) {
        let mut node = TreeNode {
            name: entry.name,
            kind: entry.kind,
            error: None,
            children: Vec::new(),
        };

        if entry.kind == EntryKind::Directory && options.can_traverse(next_level) {
            match Box::pin(walk_level(fs, &entry.path, options, next_level)).await {
                Ok(subtree) => {
                    node.error = subtree.error;
                    node.children = subtree.children;
                    deepest = deepest.max(subtree.deepest.unwrap_or(level));
                }
                Err(Aborted { partial, error }) => {
                    deepest = deepest.max(partial.deepest.unwrap_or(level));
                    node.children = partial.children;
                    children.push(node);
                    return Err(Aborted {
                        partial: Listing {
                            error: None,
                            children,
                            deepest: Some(deepest),
                        },
                        error,
                    });
                }
            }
        }

        children.push(node);
    }

    Ok(Listing {
        error: None,
        children,
        deepest: Some(deepest),
    })
}
