//! Print effective stack limits per container type

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use stack_core::{LimitOverride, StackConfig, limit_override};
use stack_runtime::MultiplierStore;

use super::load_inputs;

/// Print effective stack limits per container type
#[derive(Parser)]
pub struct Limits {
    /// Config file (JSON or TOML)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Prefab catalog (RON)
    #[arg(short, long, value_name = "FILE")]
    prefabs: PathBuf,

    /// Native stack limits to scale (e.g. 1000 for wood)
    #[arg(short, long = "base", value_name = "N", default_values_t = [100u32, 1000])]
    bases: Vec<u32>,
}

impl Limits {
    pub fn execute(self) -> Result<()> {
        let (config, prefabs) = load_inputs(&self.config, &self.prefabs)?;
        let mut store = MultiplierStore::new(config);
        store.validate(&prefabs);

        tracing::debug!(
            target: "xtask::limits",
            containers = store.len(),
            bases = ?self.bases,
            "Computing limit table"
        );

        let rows = limit_table(store.config(), &self.bases);
        let width = rows
            .iter()
            .map(|row| row.key.len())
            .max()
            .unwrap_or(0)
            .max("container".len());

        let mut header = format!("{:<width$}  {:>10}", "container", "multiplier");
        for base in &self.bases {
            header.push_str(&format!("  {:>10}", format!("x{}", base)));
        }
        println!("{}", style(header).bold().cyan());

        for row in rows {
            let mut line = format!("{:<width$}  {:>10}", row.key, row.multiplier);
            for limit in row.limits {
                let cell = match limit {
                    LimitOverride::Native => style("native".to_string()).dim(),
                    LimitOverride::Override(value) => style(value.to_string()),
                };
                line.push_str(&format!("  {:>10}", cell));
            }
            println!("{}", line);
        }

        Ok(())
    }
}

struct LimitRow {
    key: String,
    multiplier: f32,
    limits: Vec<LimitOverride>,
}

fn limit_table(config: &StackConfig, bases: &[u32]) -> Vec<LimitRow> {
    config
        .container_multipliers
        .iter()
        .map(|(key, &multiplier)| LimitRow {
            key: key.clone(),
            multiplier,
            limits: bases
                .iter()
                .map(|&base| limit_override(multiplier, base))
                .collect(),
        })
        .collect()
}
