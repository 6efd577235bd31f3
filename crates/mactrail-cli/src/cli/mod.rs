//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    init_tracing(cli.verbose);

    // Load configuration
    let config = Config::load()?;

    // Flag beats config beats default
    let output_format = cli.output.or(config.output_format).unwrap_or_default();

    let ctx = commands::Context {
        output_format,
        verbose: cli.verbose,
        config,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Extract(args) => commands::extract::execute(ctx, args).await,
        Commands::Analyze(args) => commands::analyze::execute(&ctx, args),
        Commands::Report(args) => commands::report::execute(&ctx, args),
        Commands::Scan(args) => commands::scan::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Send library tracing to stderr; `--verbose` raises the default
/// level, `RUST_LOG` overrides everything.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
