use std::path::PathBuf;

/// Indentation unit printed once per level.
pub const DEFAULT_NESTING: &str = "    ";

/// What the walker does when a directory cannot be listed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorMode {
    /// Stop the whole run at the first failure.
    #[default]
    Abort,
    /// Annotate the failing directory and carry on with its siblings.
    Continue,
}

/// Settled command-line configuration. Built once by the parser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub path: Option<PathBuf>,
    pub show_hidden: bool,
    pub max_depth: Option<usize>,
    pub summary: bool,
    pub error_mode: ErrorMode,
    pub nesting: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            show_hidden: false,
            max_depth: None,
            summary: false,
            error_mode: ErrorMode::Abort,
            nesting: DEFAULT_NESTING.to_owned(),
        }
    }
}
