//! Contracts the host simulation implements.
//!
//! [`ItemWorld`] is the slot/container storage engine: it owns every stack and
//! performs the primitive mutations (split, place, remove, drop). The oracles
//! expose read-only services the policy needs: prefab identifier resolution and
//! permission grants. Nothing in this crate stores world data itself; the
//! in-memory implementations in [`memory`] exist for tests and tooling.
mod permissions;
mod prefabs;
mod world;

#[cfg(feature = "std")]
pub mod memory;

pub use permissions::PermissionOracle;
pub use prefabs::PrefabOracle;
pub use world::ItemWorld;

#[cfg(feature = "std")]
pub use memory::{MemoryWorld, PrefabRegistry};
