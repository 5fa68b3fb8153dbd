//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check_config;
mod limits;

pub use check_config::CheckConfig;
pub use limits::Limits;

use std::path::Path;

use anyhow::{Context, Result};
use stack_content::{ConfigLoader, PrefabLoader};
use stack_core::{PrefabRegistry, StackConfig};

/// Loads a config file (JSON or TOML) and the prefab catalog it is checked against.
fn load_inputs(config: &Path, prefabs: &Path) -> Result<(StackConfig, PrefabRegistry)> {
    let config = ConfigLoader::load(config)
        .with_context(|| format!("Failed to load config: {}", config.display()))?;
    let registry = PrefabLoader::load_registry(prefabs)
        .with_context(|| format!("Failed to load prefab catalog: {}", prefabs.display()))?;
    Ok((config, registry))
}
