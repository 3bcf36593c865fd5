use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::models::{Config, ErrorMode};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const EXAMPLES: &str = "\
Examples:
    stree .
    stree -a .
    stree -L 1 .
    stree -s .";

#[derive(Parser, Debug)]
#[command(name = "stree")]
#[command(about = "stree -- directory tree viewing program.", long_about = None)]
#[command(after_help = EXAMPLES)]
#[command(disable_help_flag = true, args_override_self = true)]
pub struct Cli {
    /// Print version
    #[arg(long)]
    pub version: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Include hidden files
    #[arg(short = 'a')]
    pub all: bool,

    /// Limit maximum level of directory tree depth (negative values are ignored)
    #[arg(
        short = 'L',
        value_name = "LEVEL",
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub level: Vec<i64>,

    /// Print summary
    #[arg(short = 's')]
    pub summary: bool,

    /// Report unreadable directories and keep going instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Directory to print
    pub path: Option<PathBuf>,
}

/// Outcome of reading the raw arguments left to right.
#[derive(Debug, Eq, PartialEq)]
pub enum Invocation {
    /// `--version` came first; nothing after it matters.
    Version,
    /// `--help` came first; nothing after it matters.
    Help,
    /// Flags in their original order, then `--` and the first other token.
    Parse(Vec<OsString>),
}

/// Routes raw arguments before clap sees them.
///
/// Tokens are taken in order. `--version` and `--help` stop the scan, `-L`
/// claims the next token as its value, and the first token that is not a
/// known flag becomes the path even when it starts with `-`. Later unknown
/// tokens are dropped.
pub fn scan_args<I>(args: I) -> Invocation
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut routed = vec![args.next().unwrap_or_else(|| OsString::from("stree"))];
    let mut path = None;

    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("--version") => return Invocation::Version,
            Some("--help") => return Invocation::Help,
            Some("-a" | "-s" | "--keep-going") => routed.push(arg),
            Some("-L") => {
                routed.push(arg);
                routed.extend(args.next());
            }
            _ if path.is_none() => path = Some(arg),
            _ => log::debug!("ignoring extra argument {}", arg.to_string_lossy()),
        }
    }

    routed.push(OsString::from("--"));
    routed.extend(path);
    Invocation::Parse(routed)
}

pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            path: self.path,
            show_hidden: self.all,
            max_depth: fold_depth(&self.level),
            summary: self.summary,
            error_mode: if self.keep_going {
                ErrorMode::Continue
            } else {
                ErrorMode::Abort
            },
            ..Config::default()
        }
    }
}

/// Later `-L` values replace earlier ones; negative values change nothing.
fn fold_depth(levels: &[i64]) -> Option<usize> {
    levels
        .iter()
        .fold(None, |depth, &level| usize::try_from(level).ok().or(depth))
}
