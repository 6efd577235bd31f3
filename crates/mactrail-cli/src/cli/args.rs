//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use mactrail::report::ReportView;

/// Filesystem timeline forensics.
///
/// Consolidate per-file timestamp observations into one record per path
/// and flag patterns consistent with timestamp tampering or
/// post-deletion access.
#[derive(Parser, Debug)]
#[command(name = "mactrail")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk a live directory tree and write a timeline CSV
    Extract(ExtractArgs),

    /// Consolidate a timeline and print annotated file records
    Analyze(AnalyzeArgs),

    /// Render an HTML report from a timeline
    Report(ReportArgs),

    /// Extract and report in one run
    Scan(ScanArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

/// Presentation mode for HTML reports.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum ViewArg {
    /// Flagged records only
    #[default]
    Suspicious,
    /// Full per-file timeline
    Files,
    /// Raw event list
    Events,
}

impl From<ViewArg> for ReportView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Suspicious => Self::Suspicious,
            ViewArg::Files => Self::Files,
            ViewArg::Events => Self::Events,
        }
    }
}

// ============================================================================
// Extract command
// ============================================================================

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Root directory to walk
    pub root: String,

    /// Timeline CSV to write (default: config, else timeline.csv)
    #[arg(short = 'O', long)]
    pub out: Option<String>,

    /// Maximum number of files to examine
    #[arg(long)]
    pub limit: Option<usize>,

    /// Partition label stamped on every event
    #[arg(long)]
    pub partition: Option<String>,
}

// ============================================================================
// Analyze command
// ============================================================================

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Timeline CSV to read (default: config, else timeline.csv)
    pub input: Option<String>,

    /// Only show flagged records
    #[arg(long)]
    pub suspicious_only: bool,
}

// ============================================================================
// Report command
// ============================================================================

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Timeline CSV to read (default: config, else timeline.csv)
    pub input: Option<String>,

    /// Presentation mode
    #[arg(long, value_enum, default_value_t = ViewArg::Suspicious)]
    pub view: ViewArg,

    /// HTML file to write (default: config, else forensic_report.html)
    #[arg(short = 'O', long)]
    pub out: Option<String>,

    /// Open the report in the default browser
    #[arg(long)]
    pub open: bool,
}

// ============================================================================
// Scan command
// ============================================================================

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Root directory to walk
    pub root: String,

    /// Timeline CSV to write along the way
    #[arg(long)]
    pub timeline: Option<String>,

    /// HTML file to write
    #[arg(long)]
    pub report: Option<String>,

    /// Presentation mode
    #[arg(long, value_enum, default_value_t = ViewArg::Suspicious)]
    pub view: ViewArg,

    /// Maximum number of files to examine
    #[arg(long)]
    pub limit: Option<usize>,

    /// Partition label stamped on every event
    #[arg(long)]
    pub partition: Option<String>,

    /// Open the report in the default browser
    #[arg(long)]
    pub open: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (timeline, report, scan_limit, partition_label, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
