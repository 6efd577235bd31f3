//! Command implementations.

pub mod analyze;
pub mod config;
pub mod extract;
pub mod report;
pub mod scan;

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,

    /// Persistent defaults
    pub config: Config,
}

impl Context {
    /// Resolve a timeline input path: explicit argument (with `~`
    /// expansion) or the configured default.
    #[must_use]
    pub fn resolve_input(&self, arg: Option<&str>) -> String {
        arg.map_or_else(|| self.config.timeline_path(), expand)
    }
}

/// Expand `~` and environment-style home references in a user path.
pub fn expand(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}
