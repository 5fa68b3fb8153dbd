//! Stack-size policy and overstack transfer primitives.
//!
//! `stack-core` defines the data model shared with the host simulation (item
//! stacks, containers, entities, player inventories), the contracts the host
//! storage engine must satisfy ([`env::ItemWorld`] and the oracles), and the
//! pure rules built on top of them: effective stack limits, classification of
//! storage entities, and split/merge/swap primitives that never lose or
//! duplicate item amount.
//!
//! Stateful orchestration (caches, configuration persistence, logging) lives in
//! the `stack-runtime` crate, which depends on the types re-exported here.
pub mod config;
pub mod env;
pub mod error;
pub mod policy;
pub mod state;
pub mod transfer;

pub use config::StackConfig;
pub use env::{ItemWorld, PermissionOracle, PrefabOracle};
#[cfg(feature = "std")]
pub use env::{MemoryWorld, PrefabRegistry};
pub use error::{ErrorSeverity, StackError};
pub use policy::{
    LimitOverride, effective_limit, is_excluded, is_multiplier_eligible, limit_override,
};
pub use state::{
    ActorId, Container, ContainerFlags, ContainerId, ContentsType, DroppedItem, EntityFlags,
    EntityId, EntityKind, EntityState, ItemDefinition, ItemId, ItemStack, ItemTypeId, LootPanel,
    PlayerState, PrefabId, Vector3,
};
pub use transfer::{
    Destination, DropPlan, TransferError, merge_back, place, plan_drop, split_move, swap,
};
