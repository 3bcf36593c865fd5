use super::EntryKind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub kind: EntryKind,
    pub error: Option<String>,
    pub children: Vec<TreeNode>,
}

/// Result of walking one root path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirTree {
    /// Root path as the user supplied it.
    pub root: String,
    pub error: Option<String>,
    pub children: Vec<TreeNode>,
    /// Deepest level whose listing was attempted; the root is level 0.
    pub max_level_reached: usize,
}
