//! Persistent CLI configuration.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;
use mactrail::acquire::{DEFAULT_PARTITION_LABEL, DEFAULT_SCAN_LIMIT};

/// Fallback timeline CSV name when neither flag nor config sets one.
pub const DEFAULT_TIMELINE: &str = "timeline.csv";

/// Fallback HTML report name when neither flag nor config sets one.
pub const DEFAULT_REPORT: &str = "forensic_report.html";

/// CLI configuration: defaults for paths and scan behavior. Everything
/// here is an adapter concern; the engine itself takes no configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default timeline CSV path.
    pub timeline: Option<String>,

    /// Default HTML report path.
    pub report: Option<String>,

    /// Default cap on files examined per scan.
    pub scan_limit: Option<usize>,

    /// Default partition label stamped on extracted events.
    pub partition_label: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("io", "mactrail", "mactrail")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Effective timeline path.
    #[must_use]
    pub fn timeline_path(&self) -> String {
        self.timeline
            .clone()
            .unwrap_or_else(|| DEFAULT_TIMELINE.to_string())
    }

    /// Effective report path.
    #[must_use]
    pub fn report_path(&self) -> String {
        self.report
            .clone()
            .unwrap_or_else(|| DEFAULT_REPORT.to_string())
    }

    /// Effective scan limit.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.scan_limit.unwrap_or(DEFAULT_SCAN_LIMIT)
    }

    /// Effective partition label.
    #[must_use]
    pub fn partition(&self) -> String {
        self.partition_label
            .clone()
            .unwrap_or_else(|| DEFAULT_PARTITION_LABEL.to_string())
    }
}
