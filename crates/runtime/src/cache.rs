//! Process-lifetime caches owned by [`crate::StackContext`].

use std::collections::{HashMap, HashSet};

use stack_core::{ActorId, ContainerId, EntityId, PrefabId, PrefabOracle, StackConfig};

/// Resolved multiplier per numeric container-type id.
///
/// Entries are only ever added; the cache lives until the context is dropped.
#[derive(Clone, Debug, Default)]
pub struct MultiplierCache {
    entries: HashMap<PrefabId, f32>,
}

impl MultiplierCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps every configured key to its prefab id.
    ///
    /// The backpack key maps to `backpack`; keys the oracle does not know are
    /// skipped.
    pub fn from_config(
        config: &StackConfig,
        prefabs: &dyn PrefabOracle,
        backpack: PrefabId,
    ) -> Self {
        let mut cache = Self::new();
        for (key, &multiplier) in &config.container_multipliers {
            if key == StackConfig::BACKPACK_KEY {
                cache.insert(backpack, multiplier);
            } else if let Some(id) = prefabs.id_of(key) {
                cache.insert(id, multiplier);
            }
        }
        cache
    }

    pub fn get(&self, prefab: PrefabId) -> Option<f32> {
        self.entries.get(&prefab).copied()
    }

    pub fn insert(&mut self, prefab: PrefabId, multiplier: f32) {
        self.entries.insert(prefab, multiplier);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Backpack containers seen so far and the entities that own them.
#[derive(Clone, Debug, Default)]
pub struct BackpackRegistry {
    containers: HashSet<ContainerId>,
    entities: HashSet<EntityId>,
}

impl BackpackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a backpack. Returns false when `entity` is already known.
    pub fn register(&mut self, container: ContainerId, entity: EntityId) -> bool {
        if self.entities.contains(&entity) {
            return false;
        }
        self.containers.insert(container);
        self.entities.insert(entity);
        true
    }

    pub fn contains_container(&self, container: ContainerId) -> bool {
        self.containers.contains(&container)
    }

    pub fn contains_entity(&self, entity: EntityId) -> bool {
        self.entities.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Cached fast-transfer permission per actor.
#[derive(Clone, Debug, Default)]
pub struct ShiftIntentCache {
    grants: HashMap<ActorId, bool>,
}

impl ShiftIntentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached grant, querying `lookup` on first use.
    pub fn get_or_insert_with(&mut self, actor: ActorId, lookup: impl FnOnce() -> bool) -> bool {
        *self.grants.entry(actor).or_insert_with(lookup)
    }

    pub fn get(&self, actor: ActorId) -> Option<bool> {
        self.grants.get(&actor).copied()
    }

    pub fn evict(&mut self, actor: ActorId) -> Option<bool> {
        self.grants.remove(&actor)
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use stack_core::PrefabRegistry;

    use super::*;

    #[test]
    fn cache_maps_backpack_key_to_synthetic_id() {
        let prefabs = PrefabRegistry::new().with("furnace", 10);
        let config = StackConfig::new()
            .with_multiplier("furnace", 3.0)
            .with_multiplier(StackConfig::BACKPACK_KEY, 2.0)
            .with_multiplier("unregistered", 5.0);

        let cache = MultiplierCache::from_config(&config, &prefabs, PrefabId(99));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(PrefabId(10)), Some(3.0));
        assert_eq!(cache.get(PrefabId(99)), Some(2.0));
    }

    #[test]
    fn backpack_entity_registers_once() {
        let mut registry = BackpackRegistry::new();

        assert!(registry.register(ContainerId(1), EntityId(5)));
        assert!(!registry.register(ContainerId(2), EntityId(5)));
        assert!(registry.contains_container(ContainerId(1)));
        assert!(!registry.contains_container(ContainerId(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn shift_lookup_runs_once_until_evicted() {
        let mut cache = ShiftIntentCache::new();
        let mut lookups = 0;

        for _ in 0..3 {
            cache.get_or_insert_with(ActorId(1), || {
                lookups += 1;
                true
            });
        }
        assert_eq!(lookups, 1);

        assert_eq!(cache.evict(ActorId(1)), Some(true));
        assert!(cache.get(ActorId(1)).is_none());
    }
}
