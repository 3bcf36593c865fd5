pub mod cli;
pub mod fs;
pub mod models;
pub mod tree;

use std::io::Write;

use anyhow::Context;

use crate::fs::FileSystem;
use crate::models::Config;
use crate::tree::{render, walk};

/// Prints the tree for `config.path`, or the help text when no path was given,
/// followed by the summary line when requested.
///
/// When the walk aborts, the tree up to the failing directory is written and
/// the failure is returned without a summary.
pub async fn run<F: FileSystem, W: Write>(
    fs: &F,
    config: &Config,
    writer: &mut W,
) -> anyhow::Result<()> {
    let max_level_reached = match &config.path {
        Some(path) => {
            let outcome = walk::walk_dir(fs, path, &walk::WalkOptions::from(config)).await?;
            render::write_tree(writer, &outcome.tree, &config.nesting).context("writing tree")?;
            if let Some(err) = outcome.aborted {
                writer.flush().context("flushing output")?;
                return Err(err);
            }
            Some(outcome.tree.max_level_reached)
        }
        None => {
            write!(writer, "{}", cli::help_text()).context("writing help")?;
            None
        }
    };

    if config.summary {
        render::write_summary(writer, max_level_reached).context("writing summary")?;
    }

    writer.flush().context("flushing output")
}
