//! Multiplier configuration loader.

use std::path::Path;

use stack_core::StackConfig;

use crate::loaders::{LoadResult, read_file};

/// On-disk encodings accepted for [`StackConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension. Anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Loader for [`StackConfig`] files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a JSON or TOML file.
    ///
    /// Missing fields are filled from [`StackConfig::default`]. Values are not
    /// validated here; the runtime normalizes them during startup.
    pub fn load(path: &Path) -> LoadResult<StackConfig> {
        let content = read_file(path)?;
        Self::parse(&content, ConfigFormat::from_path(path))
    }

    pub fn parse(content: &str, format: ConfigFormat) -> LoadResult<StackConfig> {
        let config = match format {
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config JSON: {}", e))?,
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?,
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("stacks.toml")),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("stacks.json")),
            ConfigFormat::Json
        );
        assert_eq!(ConfigFormat::from_path(Path::new("stacks")), ConfigFormat::Json);
    }

    #[test]
    fn parses_toml_table() {
        let config = ConfigLoader::parse(
            r#"
            defaultMultiplier = 2.0
            debug = true

            [containerMultipliers]
            "box.wooden.large" = 3.0
            Backpack = 1.5
            "#,
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.default_multiplier, 2.0);
        assert!(config.debug);
        assert_eq!(config.multiplier("box.wooden.large"), Some(3.0));
        assert_eq!(config.multiplier(StackConfig::BACKPACK_KEY), Some(1.5));
    }

    #[test]
    fn invalid_values_are_loaded_verbatim() {
        let config = ConfigLoader::parse(
            r#"{ "defaultMultiplier": -2.0, "containerMultipliers": { "furnace": 0.0 } }"#,
            ConfigFormat::Json,
        )
        .unwrap();

        assert_eq!(config.default_multiplier, -2.0);
        assert_eq!(config.multiplier("furnace"), Some(0.0));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = ConfigLoader::parse("{ not json", ConfigFormat::Json).unwrap_err();
        assert!(err.to_string().contains("JSON"));
    }
}
