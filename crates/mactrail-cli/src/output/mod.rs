//! Output format selection.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Available output formats for analysis results.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored summary plus a table
    #[default]
    Pretty,
    /// JSON, one object keyed by path
    Json,
    /// Flat CSV, one row per file record
    Csv,
    /// YAML, one mapping keyed by path
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
