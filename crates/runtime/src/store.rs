//! Multiplier store: the in-memory owner of [`StackConfig`].
//!
//! Every mutation that changes what would be written to disk goes through
//! here and marks the [`WriteSchedule`] dirty.

use stack_core::{PrefabOracle, StackConfig};
use tracing::{info, warn};

use crate::persistence::WriteSchedule;

/// Changes startup validation applied to a configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    /// Previous default multiplier, when it had to be reset.
    pub default_reset: Option<f32>,
    /// Storage prefabs that received a default entry.
    pub populated: Vec<String>,
    /// Entries reset to the default, with their previous value.
    pub reset: Vec<(String, f32)>,
    /// Unknown keys removed, with their previous value.
    pub removed: Vec<(String, f32)>,
    /// The backpack key was missing and has been added.
    pub backpack_added: bool,
}

impl ValidationReport {
    /// Returns true when validation left the configuration untouched.
    pub fn is_clean(&self) -> bool {
        self.default_reset.is_none()
            && self.populated.is_empty()
            && self.reset.is_empty()
            && self.removed.is_empty()
            && !self.backpack_added
    }
}

/// Owns the multiplier set and its pending-write state.
#[derive(Clone, Debug)]
pub struct MultiplierStore {
    config: StackConfig,
    schedule: WriteSchedule,
}

impl MultiplierStore {
    pub fn new(config: StackConfig) -> Self {
        Self::with_schedule(config, WriteSchedule::default())
    }

    pub fn with_schedule(config: StackConfig, schedule: WriteSchedule) -> Self {
        Self { config, schedule }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn default_multiplier(&self) -> f32 {
        self.config.default_multiplier
    }

    pub fn debug(&self) -> bool {
        self.config.debug
    }

    pub fn len(&self) -> usize {
        self.config.container_multipliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.config.container_multipliers.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<f32> {
        self.config.multiplier(key)
    }

    /// Returns the multiplier for `key`, recording the default for new keys.
    pub fn resolve(&mut self, key: &str) -> f32 {
        if let Some(multiplier) = self.config.multiplier(key) {
            return multiplier;
        }
        let multiplier = self.config.default_multiplier;
        self.config
            .container_multipliers
            .insert(key.to_owned(), multiplier);
        self.schedule.schedule();
        info!(
            target: "stack::store",
            prefab = key,
            value = multiplier,
            "New container type recorded"
        );
        multiplier
    }

    /// Stores `multiplier` for `key`. Values that are not positive are
    /// replaced by the default; the stored value is returned.
    pub fn set(&mut self, key: &str, multiplier: f32) -> f32 {
        let value = if StackConfig::is_valid_multiplier(multiplier) {
            multiplier
        } else {
            warn!(
                target: "stack::store",
                prefab = key,
                value = multiplier,
                "Multiplier must be greater than 0, using default"
            );
            self.config.default_multiplier
        };
        if self.config.multiplier(key) != Some(value) {
            self.config
                .container_multipliers
                .insert(key.to_owned(), value);
            self.schedule.schedule();
        }
        value
    }

    /// Runs every startup normalization step in order.
    pub fn validate(&mut self, prefabs: &dyn PrefabOracle) -> ValidationReport {
        ValidationReport {
            default_reset: self.normalize_default(),
            populated: self.populate_defaults(prefabs.storage_prefabs()),
            reset: self.reset_invalid(),
            removed: self.remove_unknown(prefabs),
            backpack_added: self.ensure_backpack(),
        }
    }

    /// Resets a non-positive default multiplier to 1.0.
    pub fn normalize_default(&mut self) -> Option<f32> {
        let previous = self.config.default_multiplier;
        if StackConfig::is_valid_multiplier(previous) {
            return None;
        }
        warn!(
            target: "stack::store",
            value = previous,
            "Default multiplier must be greater than 0, resetting to 1"
        );
        self.config.default_multiplier = StackConfig::DEFAULT_MULTIPLIER;
        self.schedule.schedule();
        Some(previous)
    }

    /// Adds a default entry for each storage prefab missing from the map.
    pub fn populate_defaults(&mut self, names: impl IntoIterator<Item = String>) -> Vec<String> {
        let default = self.config.default_multiplier;
        let mut added = Vec::new();
        for name in names {
            if self.config.container_multipliers.contains_key(&name) {
                continue;
            }
            self.config
                .container_multipliers
                .insert(name.clone(), default);
            added.push(name);
        }
        if !added.is_empty() {
            info!(
                target: "stack::store",
                count = added.len(),
                "Added default multipliers for storage prefabs"
            );
            self.schedule.schedule();
        }
        added
    }

    /// Resets every non-positive entry to the default multiplier.
    pub fn reset_invalid(&mut self) -> Vec<(String, f32)> {
        let default = self.config.default_multiplier;
        let mut reset = Vec::new();
        for (key, value) in self.config.container_multipliers.iter_mut() {
            if StackConfig::is_valid_multiplier(*value) {
                continue;
            }
            warn!(
                target: "stack::store",
                prefab = %key,
                value = *value,
                "Multiplier must be greater than 0, resetting to default"
            );
            reset.push((key.clone(), *value));
            *value = default;
        }
        if !reset.is_empty() {
            self.schedule.schedule();
        }
        reset
    }

    /// Removes keys the prefab oracle does not know. The backpack key is kept.
    pub fn remove_unknown(&mut self, prefabs: &dyn PrefabOracle) -> Vec<(String, f32)> {
        let default = self.config.default_multiplier;
        let mut removed = Vec::new();
        self.config.container_multipliers.retain(|key, value| {
            if key == StackConfig::BACKPACK_KEY || prefabs.id_of(key).is_some() {
                return true;
            }
            if *value != default {
                warn!(
                    target: "stack::store",
                    prefab = %key,
                    value = *value,
                    "Config contains invalid prefab, removing from config"
                );
            } else {
                warn!(
                    target: "stack::store",
                    prefab = %key,
                    "Config contains invalid prefab, removing from config"
                );
            }
            removed.push((key.clone(), *value));
            false
        });
        if !removed.is_empty() {
            self.schedule.schedule();
        }
        removed
    }

    /// Inserts the backpack key with the default multiplier if missing.
    pub fn ensure_backpack(&mut self) -> bool {
        if self
            .config
            .container_multipliers
            .contains_key(StackConfig::BACKPACK_KEY)
        {
            return false;
        }
        self.config.container_multipliers.insert(
            StackConfig::BACKPACK_KEY.to_owned(),
            self.config.default_multiplier,
        );
        self.schedule.schedule();
        true
    }

    pub fn schedule(&self) -> &WriteSchedule {
        &self.schedule
    }

    pub fn schedule_mut(&mut self) -> &mut WriteSchedule {
        &mut self.schedule
    }
}
