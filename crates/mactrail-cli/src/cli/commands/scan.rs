//! `mactrail scan` - extract and report in one run.

use anyhow::Result;
use colored::Colorize;

use mactrail::acquire::{scan_tree, ScanConfig};
use mactrail::report::write_report;
use mactrail::{consolidate, detect};

use super::{expand, Context};
use crate::cli::args::ScanArgs;

pub async fn execute(ctx: Context, args: ScanArgs) -> Result<()> {
    let root = expand(&args.root);
    let scan = ScanConfig {
        root: root.clone().into(),
        limit: args.limit.unwrap_or_else(|| ctx.config.limit()),
        partition_label: args.partition.unwrap_or_else(|| ctx.config.partition()),
    };

    println!("{} {}", "[1/2]".bold(), "Extracting timeline...".bright_cyan());
    let events = scan_tree(&scan).await?;
    let timeline = args
        .timeline
        .map_or_else(|| ctx.config.timeline_path(), |p| expand(&p));
    mactrail::csv::write_events_to_path(&timeline, &events)?;
    println!(
        "  {} events -> {}",
        events.len().to_string().cyan(),
        timeline
    );

    println!("{} {}", "[2/2]".bold(), "Generating report...".bright_cyan());
    let mut table = consolidate(&events);
    detect(&mut table);
    let report = args
        .report
        .map_or_else(|| ctx.config.report_path(), |p| expand(&p));
    write_report(&report, args.view.into(), &events, &table)?;

    let suspicious = table.values().filter(|r| r.suspicious).count();
    println!(
        "  {} files, {} suspicious -> {}",
        table.len().to_string().cyan(),
        if suspicious == 0 {
            suspicious.to_string().green()
        } else {
            suspicious.to_string().red().bold()
        },
        report
    );

    if args.open {
        open::that(&report)?;
    }

    Ok(())
}
