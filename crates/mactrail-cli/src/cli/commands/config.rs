//! `mactrail config` - manage persistent defaults.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(_ctx: &Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, value),
        ConfigCommands::Path => {
            println!("{}", Config::path()?.display());
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;

    println!("{} {}", "timeline:".bold(), config.timeline_path());
    println!("{} {}", "report:".bold(), config.report_path());
    println!("{} {}", "scan_limit:".bold(), config.limit());
    println!("{} {}", "partition_label:".bold(), config.partition());
    println!(
        "{} {}",
        "output_format:".bold(),
        config.output_format.unwrap_or_default()
    );

    Ok(())
}

fn set(key: &str, value: String) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "timeline" => config.timeline = Some(value),
        "report" => config.report = Some(value),
        "scan_limit" => config.scan_limit = Some(value.parse()?),
        "partition_label" => config.partition_label = Some(value),
        "output_format" => {
            let format = <OutputFormat as clap::ValueEnum>::from_str(&value, true)
                .map_err(|e| anyhow::anyhow!("invalid output format: {e}"))?;
            config.output_format = Some(format);
        }
        _ => anyhow::bail!(
            "Unknown key: {key}\n\
             Valid keys: timeline, report, scan_limit, partition_label, output_format"
        ),
    }

    config.save()?;
    println!("{} {key}", "Set".green().bold());

    Ok(())
}
