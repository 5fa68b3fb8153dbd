//! Development tasks for the chest stack multiplier
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CheckConfig, Limits};
use tracing_subscriber::EnvFilter;

/// Development tasks for the chest stack multiplier
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for stack multiplier configs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Validate a multiplier config against a prefab catalog
    CheckConfig(CheckConfig),

    /// Print effective stack limits per container type
    Limits(Limits),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::CheckConfig(cmd) => cmd.execute(),
        Command::Limits(cmd) => cmd.execute(),
    }
}
