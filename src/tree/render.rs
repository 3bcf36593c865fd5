use std::io::{self, Write};

use crate::models::{DirTree, EntryKind, TreeNode};

const BOLD: &str = "\u{1b}[1;30m";
const RESET: &str = "\u{1b}[0;30m";

/// Wraps `text` in the fixed bold escape pair used for the root and directories.
pub fn bold(text: &str) -> String {
    format!("{BOLD}{text}{RESET}")
}

/// Writes the bold root line followed by every entry, one per line.
pub fn write_tree<W: Write>(writer: &mut W, tree: &DirTree, nesting: &str) -> io::Result<()> {
    writer.write_all(bold(&tree.root).as_bytes())?;
    write_error(writer, tree.error.as_deref())?;
    writer.write_all(b"\n")?;

    write_children(writer, &tree.children, nesting, 1)
}

fn write_children<W: Write>(
    writer: &mut W,
    children: &[TreeNode],
    nesting: &str,
    level: usize,
) -> io::Result<()> {
    let prefix = nesting.repeat(level);

    for node in children {
        write!(writer, "{prefix} ")?;

        match node.kind {
            EntryKind::Directory => writer.write_all(bold(&node.name).as_bytes())?,
            EntryKind::File | EntryKind::Symlink | EntryKind::Other => {
                writer.write_all(node.name.as_bytes())?
            }
        }

        write_error(writer, node.error.as_deref())?;
        writer.write_all(b"\n")?;

        write_children(writer, &node.children, nesting, level + 1)?;
    }

    Ok(())
}

fn write_error<W: Write>(writer: &mut W, error: Option<&str>) -> io::Result<()> {
    match error {
        Some(error) => write!(writer, " [error: {error}]"),
        None => Ok(()),
    }
}

/// Summary line. `None` means no traversal happened.
pub fn write_summary<W: Write>(writer: &mut W, max_level_reached: Option<usize>) -> io::Result<()> {
    match max_level_reached {
        Some(level) => writeln!(writer, "Maximum level reached: {level}."),
        None => writeln!(writer, "Was not traversing."),
    }
}
