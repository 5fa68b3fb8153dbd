use bitflags::bitflags;

use super::ids::{ContainerId, EntityId, ItemId};

bitflags! {
    /// Capability flags carried by a container.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ContainerFlags: u8 {
        /// Core player inventory section (main, belt, wear).
        const IS_PLAYER = 1 << 0;
        /// Portable backpack storage.
        const BACKPACK = 1 << 1;
        /// Rejects every placement.
        const LOCKED = 1 << 2;
    }
}

/// Ordered slot array owned by one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    pub id: ContainerId,
    pub owner: Option<EntityId>,
    pub slots: Vec<Option<ItemId>>,
    pub flags: ContainerFlags,
}

impl Container {
    pub fn new(id: ContainerId, owner: Option<EntityId>, capacity: usize) -> Self {
        Self {
            id,
            owner,
            slots: vec![None; capacity],
            flags: ContainerFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: ContainerFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Item in `slot`, or `None` when the slot is empty or out of range.
    pub fn slot(&self, slot: usize) -> Option<ItemId> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Stacks in slot order.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    pub fn is_player_inventory(&self) -> bool {
        self.flags.contains(ContainerFlags::IS_PLAYER)
    }

    pub fn is_locked(&self) -> bool {
        self.flags.contains(ContainerFlags::LOCKED)
    }
}
