//! Data model shared with the host simulation.
//!
//! These types mirror what the host storage engine exposes through
//! [`crate::env::ItemWorld`]. They carry no behavior beyond small queries; all
//! mutation goes through the world so the host stays the single owner of slot
//! storage.
mod container;
mod entity;
mod ids;
mod item;
mod player;

pub use container::{Container, ContainerFlags};
pub use entity::{DroppedItem, EntityFlags, EntityKind, EntityState, Vector3};
pub use ids::{ActorId, ContainerId, EntityId, ItemId, ItemTypeId, PrefabId};
pub use item::{ContentsType, ItemDefinition, ItemStack};
pub use player::{LootPanel, PlayerState};
