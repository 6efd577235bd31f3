//! `mactrail report` - render an HTML report from a timeline.

use anyhow::Result;
use colored::Colorize;

use mactrail::report::write_report;
use mactrail::{consolidate, detect};

use super::{expand, Context};
use crate::cli::args::ReportArgs;

pub fn execute(ctx: &Context, args: ReportArgs) -> Result<()> {
    let input = ctx.resolve_input(args.input.as_deref());
    let events = mactrail::csv::read_events_from_path(&input)?;

    let mut table = consolidate(&events);
    detect(&mut table);

    let out = args
        .out
        .map_or_else(|| ctx.config.report_path(), |p| expand(&p));
    write_report(&out, args.view.into(), &events, &table)?;

    let suspicious = table.values().filter(|r| r.suspicious).count();
    println!("{} {}", "Report written:".bold(), out.cyan());
    println!(
        "  {} files, {} suspicious",
        table.len().to_string().bold(),
        suspicious.to_string().red().bold()
    );

    if args.open {
        open::that(&out)?;
    }

    Ok(())
}
