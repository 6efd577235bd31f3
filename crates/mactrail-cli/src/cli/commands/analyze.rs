//! `mactrail analyze` - consolidate a timeline and print findings.

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use mactrail::{consolidate, detect, FileRecord, FileTable};

use super::Context;
use crate::cli::args::AnalyzeArgs;
use crate::output::OutputFormat;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "CRTIME")]
    crtime: String,
    #[tabled(rename = "MTIME")]
    mtime: String,
    #[tabled(rename = "ATIME")]
    atime: String,
    #[tabled(rename = "CTIME")]
    ctime: String,
    #[tabled(rename = "Del")]
    deleted: String,
    #[tabled(rename = "Flags")]
    flags: String,
}

pub fn execute(ctx: &Context, args: AnalyzeArgs) -> Result<()> {
    let input = ctx.resolve_input(args.input.as_deref());
    let events = mactrail::csv::read_events_from_path(&input)?;

    let mut table = consolidate(&events);
    detect(&mut table);

    if args.suspicious_only {
        table.retain(|_, record| record.suspicious);
    }

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&table)?);
        }
        OutputFormat::Csv => print_csv(&table),
        OutputFormat::Pretty => print_pretty(&input, events.len(), &table),
    }

    Ok(())
}

fn print_csv(table: &FileTable) {
    println!("path,partition,inode,size,deleted,crtime,mtime,atime,ctime,flags,suspicious");
    for record in table.values() {
        println!(
            "{},{},{},{},{},{},{},{},{},\"{}\",{}",
            record.path,
            record.partition,
            record.inode,
            record.size,
            record.deleted,
            fmt_csv(record.crtime),
            fmt_csv(record.mtime),
            fmt_csv(record.atime),
            fmt_csv(record.ctime),
            join_flags(record, ";"),
            record.suspicious
        );
    }
}

fn print_pretty(input: &str, event_count: usize, table: &FileTable) {
    let suspicious = table.values().filter(|r| r.suspicious).count();

    println!("{} {}", "Timeline:".bold(), input);
    println!(
        "  {} {}   {} {}   {} {}",
        "Events:".bold(),
        event_count.to_string().cyan(),
        "Files:".bold(),
        table.len().to_string().cyan(),
        "Suspicious:".bold(),
        if suspicious == 0 {
            suspicious.to_string().green()
        } else {
            suspicious.to_string().red().bold()
        }
    );
    println!();

    if table.is_empty() {
        println!("{}", "No file records.".dimmed());
        return;
    }

    let rows: Vec<RecordRow> = table
        .values()
        .map(|record| RecordRow {
            path: record.path.clone(),
            crtime: fmt_cell(record.crtime),
            mtime: fmt_cell(record.mtime),
            atime: fmt_cell(record.atime),
            ctime: fmt_cell(record.ctime),
            deleted: if record.deleted {
                "yes".to_string()
            } else {
                String::new()
            },
            flags: join_flags(record, ", "),
        })
        .collect();

    let rendered = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{rendered}");

    if suspicious > 0 {
        println!();
        println!("{}", "Findings:".bold().red());
        for record in table.values().filter(|r| r.suspicious) {
            println!(
                "  {} {}  {}",
                "-".red(),
                record.path.bright_white(),
                join_flags(record, ", ").red()
            );
        }
    }
}

fn join_flags(record: &FileRecord, sep: &str) -> String {
    record
        .flags
        .iter()
        .map(|flag| flag.label())
        .collect::<Vec<_>>()
        .join(sep)
}

fn fmt_cell(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

fn fmt_csv(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.to_rfc3339()).unwrap_or_default()
}
