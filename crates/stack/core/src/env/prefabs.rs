use crate::state::PrefabId;

/// Prefab identifier resolution (the host's string pool).
///
/// Maps container-type names to the fast numeric ids entities carry.
pub trait PrefabOracle: Send + Sync {
    /// Numeric id of a pooled prefab name.
    fn id_of(&self, name: &str) -> Option<PrefabId>;

    /// Returns true if `id` belongs to a real prefab.
    fn is_registered(&self, id: PrefabId) -> bool;

    /// Starting point when probing for an unused id.
    fn closest(&self) -> PrefabId;

    /// Names of every deployable storage prefab, used to seed defaults.
    fn storage_prefabs(&self) -> Vec<String> {
        Vec::new()
    }
}
