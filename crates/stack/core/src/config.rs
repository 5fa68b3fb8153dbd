use std::collections::BTreeMap;
use std::time::Duration;

/// Persisted multiplier configuration.
///
/// Keys of `container_multipliers` are container-type (prefab) names or the
/// reserved [`StackConfig::BACKPACK_KEY`]. The map is ordered so that written
/// files are stable and readable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct StackConfig {
    /// Multiplier assigned to container types seen for the first time.
    pub default_multiplier: f32,
    pub container_multipliers: BTreeMap<String, f32>,
    /// Emits transfer failures at warn level instead of debug.
    pub debug: bool,
}

impl StackConfig {
    // ===== policy constants =====
    /// Multiplier that leaves the native stack limit untouched.
    pub const DEFAULT_MULTIPLIER: f32 = 1.0;
    /// Upper bound on ground stacks spawned when dropping one overstack.
    pub const MAX_DROP_LOOPS: u32 = 20;
    /// Reserved configuration key holding the backpack multiplier.
    pub const BACKPACK_KEY: &'static str = "Backpack";
    /// Prefab name of the player body, used to detect backpack containers.
    pub const PLAYER_PREFAB: &'static str = "assets/prefabs/player/player.prefab";
    /// Capability grant required for fast-transfer (shift) behaviors.
    pub const SHIFT_PERMISSION: &'static str = "cheststackmultiplier.useshift";

    // ===== persistence =====
    /// Window over which bursts of configuration changes are coalesced.
    pub const CONFIG_WRITE_DELAY: Duration = Duration::from_secs(5);

    pub fn new() -> Self {
        Self {
            default_multiplier: Self::DEFAULT_MULTIPLIER,
            container_multipliers: BTreeMap::new(),
            debug: false,
        }
    }

    pub fn with_default_multiplier(mut self, multiplier: f32) -> Self {
        self.default_multiplier = multiplier;
        self
    }

    pub fn with_multiplier(mut self, key: impl Into<String>, multiplier: f32) -> Self {
        self.container_multipliers.insert(key.into(), multiplier);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Returns the configured multiplier for `key`, if present.
    pub fn multiplier(&self, key: &str) -> Option<f32> {
        self.container_multipliers.get(key).copied()
    }

    /// Returns true when a multiplier value may be used as-is.
    pub fn is_valid_multiplier(value: f32) -> bool {
        value.is_finite() && value > 0.0
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_populated_from_defaults() {
        let config: StackConfig =
            serde_json::from_str(r#"{ "containerMultipliers": { "furnace": 2.0 } }"#).unwrap();

        assert_eq!(config.default_multiplier, StackConfig::DEFAULT_MULTIPLIER);
        assert_eq!(config.multiplier("furnace"), Some(2.0));
        assert!(!config.debug);
    }

    #[test]
    fn keys_serialize_in_sorted_order() {
        let config = StackConfig::new()
            .with_multiplier("woodbox_deployed", 3.0)
            .with_multiplier("box.wooden.large", 2.0);

        let json = serde_json::to_string(&config).unwrap();
        let large = json.find("box.wooden.large").unwrap();
        let small = json.find("woodbox_deployed").unwrap();
        assert!(large < small);
    }
}
