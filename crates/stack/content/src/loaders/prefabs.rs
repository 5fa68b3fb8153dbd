//! Prefab catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stack_core::{PrefabId, PrefabRegistry};

use crate::loaders::{LoadResult, read_file};

/// One prefab known to the host's string pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabEntry {
    pub name: String,
    pub id: u32,
    /// Deployable storage that gets a default multiplier entry.
    #[serde(default)]
    pub storage: bool,
}

/// Prefab catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefabCatalog {
    /// First id the host guarantees is past its own allocations.
    #[serde(default)]
    pub closest: u32,
    pub prefabs: Vec<PrefabEntry>,
}

impl PrefabCatalog {
    pub fn into_registry(self) -> PrefabRegistry {
        let mut registry = PrefabRegistry::new().with_closest(self.closest);
        for entry in self.prefabs {
            if entry.storage {
                registry.register_storage(entry.name, PrefabId(entry.id));
            } else {
                registry.register(entry.name, PrefabId(entry.id));
            }
        }
        registry
    }
}

/// Loader for prefab catalogs from RON files.
pub struct PrefabLoader;

impl PrefabLoader {
    /// Load a prefab catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<PrefabCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PrefabCatalog> {
        let catalog: PrefabCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse prefab catalog RON: {}", e))?;

        Ok(catalog)
    }

    /// Load a catalog and build the registry the runtime consumes.
    pub fn load_registry(path: &Path) -> LoadResult<PrefabRegistry> {
        Ok(Self::load(path)?.into_registry())
    }
}

#[cfg(test)]
mod tests {
    use stack_core::PrefabOracle;

    use super::*;

    const CATALOG: &str = r#"
        (
            closest: 5000,
            prefabs: [
                (name: "assets/prefabs/player/player.prefab", id: 4108),
                (name: "box.wooden.large", id: 2206, storage: true),
                (name: "furnace", id: 2931, storage: true),
            ],
        )
    "#;

    #[test]
    fn catalog_builds_registry() {
        let registry = PrefabLoader::parse(CATALOG).unwrap().into_registry();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.id_of("furnace"), Some(PrefabId(2931)));
        assert_eq!(registry.closest(), PrefabId(5000));
        assert_eq!(
            registry.storage_prefabs(),
            vec!["box.wooden.large".to_string(), "furnace".to_string()]
        );
    }

    #[test]
    fn storage_flag_defaults_to_false() {
        let catalog = PrefabLoader::parse(r#"(prefabs: [(name: "rock", id: 1)])"#).unwrap();

        assert!(!catalog.prefabs[0].storage);
        assert_eq!(catalog.closest, 0);
    }
}
