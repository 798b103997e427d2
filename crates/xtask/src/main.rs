//! Development tasks for the base stats generator
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::GenBaseStats;

/// Development tasks for the base stats generator
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for base stat generation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate base_stats_auto_gen.go from the data table exports
    GenBaseStats(GenBaseStats),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::GenBaseStats(cmd) => cmd.execute(),
    }
}
