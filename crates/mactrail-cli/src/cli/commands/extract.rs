//! `mactrail extract` - walk a live tree into a timeline CSV.

use anyhow::Result;
use colored::Colorize;

use mactrail::acquire::{scan_tree, ScanConfig};

use super::{expand, Context};
use crate::cli::args::ExtractArgs;

pub async fn execute(ctx: Context, args: ExtractArgs) -> Result<()> {
    let root = expand(&args.root);
    let scan = ScanConfig {
        root: root.clone().into(),
        limit: args.limit.unwrap_or_else(|| ctx.config.limit()),
        partition_label: args.partition.unwrap_or_else(|| ctx.config.partition()),
    };

    let events = scan_tree(&scan).await?;

    let out = args
        .out
        .map_or_else(|| ctx.config.timeline_path(), |p| expand(&p));
    mactrail::csv::write_events_to_path(&out, &events)?;

    println!(
        "{} {} events from {}",
        "Extracted:".bold(),
        events.len().to_string().cyan().bold(),
        root
    );
    println!("{} {}", "Timeline saved:".bold(), out.cyan());
    println!("{}", format!("Scan limit: {}", scan.limit).dimmed());

    Ok(())
}
