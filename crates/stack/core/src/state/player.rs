use super::ids::{ActorId, ContainerId, EntityId};

/// Containers a player currently has open through the loot panel.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootPanel {
    /// Entity whose containers are shown, if any.
    pub source: Option<EntityId>,
    pub containers: Vec<ContainerId>,
}

impl LootPanel {
    pub fn is_open(&self) -> bool {
        !self.containers.is_empty()
    }

    pub fn contains(&self, container: ContainerId) -> bool {
        self.containers.contains(&container)
    }
}

/// Per-player view the move orchestrator works against.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub actor: ActorId,
    pub entity: EntityId,
    pub main: ContainerId,
    pub belt: ContainerId,
    pub wear: ContainerId,
    pub loot: LootPanel,
    /// Held-modifier (sprint) input at request time.
    pub modifier_held: bool,
}

impl PlayerState {
    /// Resolves a container id among the player's own sections and the open
    /// loot containers.
    pub fn find_container(&self, id: ContainerId) -> Option<ContainerId> {
        if id == self.main || id == self.belt || id == self.wear || self.loot.contains(id) {
            Some(id)
        } else {
            None
        }
    }

    /// Open loot container matching `id`, if any.
    pub fn loot_container(&self, id: ContainerId) -> Option<ContainerId> {
        self.loot.contains(id).then_some(id)
    }
}
