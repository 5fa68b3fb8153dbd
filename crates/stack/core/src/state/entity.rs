use bitflags::bitflags;

use super::ids::{ActorId, EntityId, ItemId, PrefabId};

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EntityFlags: u8 {
        const LOCKED = 1 << 0;
    }
}

/// Closed set of entity kinds the stack policy distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    /// Player body; owns the core inventory sections.
    Player { actor: ActorId },
    Corpse,
    /// Generic world loot (crates, barrels).
    LootContainer,
    BettingTerminal,
    ShopFront,
    /// Access-gated dispensing machine.
    VendingMachine,
    /// Any other deployable storage (boxes, furnaces, lockers...).
    Storage,
}

/// World entity as seen by the stack policy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityState {
    pub id: EntityId,
    pub prefab_id: PrefabId,
    pub prefab_name: String,
    pub kind: EntityKind,
    pub flags: EntityFlags,
    pub destroyed: bool,
    pub position: Vector3,
    pub velocity: Vector3,
}

impl EntityState {
    pub fn new(
        id: EntityId,
        prefab_id: PrefabId,
        prefab_name: impl Into<String>,
        kind: EntityKind,
    ) -> Self {
        Self {
            id,
            prefab_id,
            prefab_name: prefab_name.into(),
            kind,
            flags: EntityFlags::empty(),
            destroyed: false,
            position: Vector3::ZERO,
            velocity: Vector3::ZERO,
        }
    }

    pub fn with_flags(mut self, flags: EntityFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn at(mut self, position: Vector3, velocity: Vector3) -> Self {
        self.position = position;
        self.velocity = velocity;
        self
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.destroyed
    }

    pub fn is_locked(&self) -> bool {
        self.flags.contains(EntityFlags::LOCKED)
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.into()
    }

    /// Actor controlling this entity, when it is a player body.
    pub fn actor(&self) -> Option<ActorId> {
        match self.kind {
            EntityKind::Player { actor } => Some(actor),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl core::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Physical ground stack created by a drop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppedItem {
    pub item: ItemId,
    pub amount: u32,
    pub position: Vector3,
    pub velocity: Vector3,
}
