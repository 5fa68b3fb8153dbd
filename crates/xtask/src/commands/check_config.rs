//! Validate a multiplier config against a prefab catalog
//!
//! Runs the same startup normalization the runtime applies and reports every
//! change. With `--write` the normalized config is saved as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use stack_content::ConfigFormat;
use stack_runtime::{ConfigRepository, FileConfigRepository, MultiplierStore, ValidationReport};

use super::load_inputs;

/// Validate a multiplier config against a prefab catalog
#[derive(Parser)]
pub struct CheckConfig {
    /// Config file (JSON or TOML)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Prefab catalog (RON)
    #[arg(short, long, value_name = "FILE")]
    prefabs: PathBuf,

    /// Save the normalized config
    #[arg(short, long)]
    write: bool,

    /// Destination for --write (defaults to CONFIG when it is JSON)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// List of changes validation applied
    Summary,
    /// Normalized config as JSON
    Json,
}

impl CheckConfig {
    pub fn execute(self) -> Result<()> {
        let (config, prefabs) = load_inputs(&self.config, &self.prefabs)?;

        let mut store = MultiplierStore::new(config);
        let report = store.validate(&prefabs);

        println!(
            "{} {}",
            style("Config:").bold().cyan(),
            self.config.display()
        );
        println!(
            "{} {}",
            style("Containers:").bold().cyan(),
            store.len()
        );
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&report),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(store.config())
                    .context("Failed to serialize config to JSON")?;
                println!("{}", json);
            }
        }

        if self.write {
            let destination = self.destination()?;
            FileConfigRepository::new(&destination)
                .save(store.config())
                .with_context(|| format!("Failed to write config: {}", destination.display()))?;
            println!(
                "{} {}",
                style("Wrote").green().bold(),
                destination.display()
            );
        }

        Ok(())
    }

    fn destination(&self) -> Result<PathBuf> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }
        if ConfigFormat::from_path(&self.config) != ConfigFormat::Json {
            anyhow::bail!(
                "{} is not JSON\n\nHint: pass --output to choose where the JSON config goes",
                self.config.display()
            );
        }
        Ok(self.config.clone())
    }
}

fn print_summary(report: &ValidationReport) {
    if report.is_clean() {
        println!("{}", style("Config is valid, nothing to change").green());
        return;
    }

    println!("{}", style("=== Validation Changes ===").bold().green());
    println!();

    if let Some(previous) = report.default_reset {
        println!("{}", style("Default multiplier:").bold().yellow());
        println!("  {} -> 1", previous);
        println!();
    }
    if !report.populated.is_empty() {
        println!("{}", style("Added storage prefabs:").bold().yellow());
        for name in &report.populated {
            println!("  {}", name);
        }
        println!();
    }
    if !report.reset.is_empty() {
        println!("{}", style("Reset invalid multipliers:").bold().yellow());
        for (name, value) in &report.reset {
            println!("  {} ({})", name, value);
        }
        println!();
    }
    if !report.removed.is_empty() {
        println!("{}", style("Removed unknown prefabs:").bold().yellow());
        for (name, value) in &report.removed {
            println!("  {} ({})", name, value);
        }
        println!();
    }
    if report.backpack_added {
        println!("{}", style("Added backpack multiplier").bold().yellow());
        println!();
    }
}
