//! In-memory host implementations for tests and offline tools.
use std::collections::{BTreeSet, HashMap, HashSet};

use crate::env::{ItemWorld, PrefabOracle};
use crate::state::{
    ActorId, Container, ContainerFlags, ContainerId, DroppedItem, EntityId, EntityState,
    ItemDefinition, ItemId, ItemStack, ItemTypeId, LootPanel, PlayerState, PrefabId, Vector3,
};

/// Slot storage backed by hash maps.
///
/// Placement rules follow the contract on [`ItemWorld`]: a free slot takes the
/// whole stack, a compatible occupant absorbs it without re-checking limits,
/// an incompatible occupant or a locked container rejects it.
#[derive(Debug, Default)]
pub struct MemoryWorld {
    items: HashMap<ItemId, ItemStack>,
    containers: HashMap<ContainerId, Container>,
    entities: HashMap<EntityId, EntityState>,
    players: HashMap<ActorId, PlayerState>,
    authorized: HashSet<(EntityId, ActorId)>,
    dropped: Vec<DroppedItem>,
    updates: HashMap<ActorId, usize>,
    dirty: HashSet<ItemId>,
    next_item: u64,
    next_container: u64,
}

impl MemoryWorld {
    pub const MAIN_SLOTS: usize = 24;
    pub const BELT_SLOTS: usize = 6;
    pub const WEAR_SLOTS: usize = 7;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entity(&mut self, entity: EntityState) -> EntityId {
        let id = entity.id;
        self.entities.insert(id, entity);
        id
    }

    pub fn add_container(
        &mut self,
        owner: Option<EntityId>,
        capacity: usize,
        flags: ContainerFlags,
    ) -> ContainerId {
        self.next_container += 1;
        let id = ContainerId(self.next_container);
        self.containers
            .insert(id, Container::new(id, owner, capacity).with_flags(flags));
        id
    }

    /// Registers a player body with empty main, belt and wear sections.
    pub fn spawn_player(&mut self, actor: ActorId, body: EntityState) -> ActorId {
        let entity = self.add_entity(body);
        let main = self.add_container(Some(entity), Self::MAIN_SLOTS, ContainerFlags::IS_PLAYER);
        let belt = self.add_container(Some(entity), Self::BELT_SLOTS, ContainerFlags::IS_PLAYER);
        let wear = self.add_container(Some(entity), Self::WEAR_SLOTS, ContainerFlags::IS_PLAYER);
        self.players.insert(
            actor,
            PlayerState {
                actor,
                entity,
                main,
                belt,
                wear,
                loot: LootPanel::default(),
                modifier_held: false,
            },
        );
        actor
    }

    /// Creates an unparented stack.
    pub fn create_item(&mut self, definition: ItemDefinition, amount: u32) -> ItemId {
        self.next_item += 1;
        let id = ItemId(self.next_item);
        self.items
            .insert(id, ItemStack::new(id, definition, amount.max(1)));
        id
    }

    /// Creates a stack directly in `slot`, bypassing placement rules.
    ///
    /// Returns `None` if the container is missing or the slot is taken.
    pub fn insert_item(
        &mut self,
        container: ContainerId,
        slot: usize,
        definition: ItemDefinition,
        amount: u32,
    ) -> Option<ItemId> {
        let free = self.containers.get(&container)?.slots.get(slot)?.is_none();
        if !free {
            return None;
        }
        let id = self.create_item(definition, amount);
        self.attach(id, container, slot);
        Some(id)
    }

    pub fn open_loot(&mut self, actor: ActorId, source: EntityId, containers: Vec<ContainerId>) {
        if let Some(player) = self.players.get_mut(&actor) {
            player.loot = LootPanel {
                source: Some(source),
                containers,
            };
        }
    }

    pub fn close_loot(&mut self, actor: ActorId) {
        if let Some(player) = self.players.get_mut(&actor) {
            player.loot = LootPanel::default();
        }
    }

    pub fn set_modifier_held(&mut self, actor: ActorId, held: bool) {
        if let Some(player) = self.players.get_mut(&actor) {
            player.modifier_held = held;
        }
    }

    pub fn authorize(&mut self, entity: EntityId, actor: ActorId) {
        self.authorized.insert((entity, actor));
    }

    pub fn destroy_entity(&mut self, entity: EntityId) {
        if let Some(state) = self.entities.get_mut(&entity) {
            state.destroyed = true;
        }
    }

    pub fn set_container_flags(&mut self, container: ContainerId, flags: ContainerFlags) {
        if let Some(target) = self.containers.get_mut(&container) {
            target.flags = flags;
        }
    }

    pub fn items_in(&self, container: ContainerId) -> Vec<&ItemStack> {
        self.containers
            .get(&container)
            .map(|c| c.items().filter_map(|id| self.items.get(&id)).collect())
            .unwrap_or_default()
    }

    /// Sum of every existing stack of `item_type`, on the ground or not.
    pub fn total_amount(&self, item_type: ItemTypeId) -> u64 {
        self.items
            .values()
            .filter(|stack| stack.definition.item_type == item_type)
            .map(|stack| u64::from(stack.amount))
            .sum()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn dropped(&self) -> &[DroppedItem] {
        &self.dropped
    }

    pub fn update_count(&self, actor: ActorId) -> usize {
        self.updates.get(&actor).copied().unwrap_or(0)
    }

    pub fn is_dirty(&self, item: ItemId) -> bool {
        self.dirty.contains(&item)
    }

    fn attach(&mut self, item: ItemId, container: ContainerId, slot: usize) {
        if let Some(target) = self.containers.get_mut(&container)
            && let Some(entry) = target.slots.get_mut(slot)
        {
            *entry = Some(item);
        }
        if let Some(stack) = self.items.get_mut(&item) {
            stack.parent = Some(container);
            stack.slot = Some(slot);
        }
    }

    fn detach(&mut self, item: ItemId) {
        let Some(stack) = self.items.get_mut(&item) else {
            return;
        };
        let (Some(parent), Some(slot)) = (stack.parent.take(), stack.slot.take()) else {
            return;
        };
        if let Some(container) = self.containers.get_mut(&parent)
            && let Some(entry) = container.slots.get_mut(slot)
            && *entry == Some(item)
        {
            *entry = None;
        }
    }
}

impl ItemWorld for MemoryWorld {
    fn item(&self, id: ItemId) -> Option<&ItemStack> {
        self.items.get(&id)
    }

    fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(&id)
    }

    fn entity(&self, id: EntityId) -> Option<&EntityState> {
        self.entities.get(&id)
    }

    fn player(&self, actor: ActorId) -> Option<&PlayerState> {
        self.players.get(&actor)
    }

    fn is_access_authorized(&self, entity: EntityId, actor: ActorId) -> bool {
        self.authorized.contains(&(entity, actor))
    }

    fn split_item(&mut self, item: ItemId, amount: u32) -> Option<ItemId> {
        let stack = self.items.get_mut(&item)?;
        if amount == 0 || amount >= stack.amount {
            return None;
        }
        stack.amount -= amount;
        let definition = stack.definition.clone();
        Some(self.create_item(definition, amount))
    }

    fn move_to_container(
        &mut self,
        item: ItemId,
        container: ContainerId,
        slot: Option<usize>,
    ) -> bool {
        let Some(moving) = self.items.get(&item) else {
            return false;
        };
        let Some(target) = self.containers.get(&container) else {
            return false;
        };
        if target.is_locked() {
            return false;
        }
        let slot = match slot {
            Some(slot) if slot < target.capacity() => slot,
            Some(_) => return false,
            None => match target.first_empty_slot() {
                Some(slot) => slot,
                None => return false,
            },
        };

        match target.slot(slot) {
            Some(occupant) if occupant == item => true,
            Some(occupant) => {
                let compatible = self
                    .items
                    .get(&occupant)
                    .is_some_and(|existing| existing.can_stack(moving));
                if !compatible {
                    return false;
                }
                let amount = moving.amount;
                self.detach(item);
                self.items.remove(&item);
                self.add_amount(occupant, amount);
                true
            }
            None => {
                self.detach(item);
                self.attach(item, container, slot);
                true
            }
        }
    }

    fn give_item(&mut self, actor: ActorId, item: ItemId) -> bool {
        let Some(player) = self.players.get(&actor) else {
            return false;
        };
        let (main, belt) = (player.main, player.belt);
        self.move_to_container(item, main, None) || self.move_to_container(item, belt, None)
    }

    fn remove_from_container(&mut self, item: ItemId) {
        self.detach(item);
    }

    fn add_amount(&mut self, item: ItemId, amount: u32) {
        if let Some(stack) = self.items.get_mut(&item) {
            stack.amount = stack.amount.saturating_add(amount);
        }
    }

    fn destroy_item(&mut self, item: ItemId) {
        self.detach(item);
        self.items.remove(&item);
        self.dirty.remove(&item);
    }

    fn drop_item(&mut self, item: ItemId, position: Vector3, velocity: Vector3) -> bool {
        let Some(amount) = self.items.get(&item).map(|stack| stack.amount) else {
            return false;
        };
        self.detach(item);
        self.dropped.push(DroppedItem {
            item,
            amount,
            position,
            velocity,
        });
        true
    }

    fn mark_dirty(&mut self, item: ItemId) {
        self.dirty.insert(item);
    }

    fn server_update(&mut self, actor: ActorId) {
        *self.updates.entry(actor).or_default() += 1;
    }
}

/// Prefab string pool backed by hash maps.
#[derive(Clone, Debug, Default)]
pub struct PrefabRegistry {
    by_name: HashMap<String, PrefabId>,
    ids: HashSet<PrefabId>,
    storage: BTreeSet<String>,
    closest: u32,
}

impl PrefabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, id: PrefabId) {
        self.by_name.insert(name.into(), id);
        self.ids.insert(id);
    }

    /// Registers a deployable storage prefab.
    pub fn register_storage(&mut self, name: impl Into<String>, id: PrefabId) {
        let name = name.into();
        self.storage.insert(name.clone());
        self.register(name, id);
    }

    pub fn with(mut self, name: impl Into<String>, id: u32) -> Self {
        self.register(name, PrefabId(id));
        self
    }

    pub fn with_storage(mut self, name: impl Into<String>, id: u32) -> Self {
        self.register_storage(name, PrefabId(id));
        self
    }

    pub fn with_closest(mut self, closest: u32) -> Self {
        self.closest = closest;
        self
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl PrefabOracle for PrefabRegistry {
    fn id_of(&self, name: &str) -> Option<PrefabId> {
        self.by_name.get(name).copied()
    }

    fn is_registered(&self, id: PrefabId) -> bool {
        self.ids.contains(&id)
    }

    fn closest(&self) -> PrefabId {
        PrefabId(self.closest)
    }

    fn storage_prefabs(&self) -> Vec<String> {
        self.storage.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityKind;

    fn wood() -> ItemDefinition {
        ItemDefinition::new(ItemTypeId(1), "wood", 1000)
    }

    fn world_with_box() -> (MemoryWorld, ContainerId) {
        let mut world = MemoryWorld::new();
        let entity = world.add_entity(EntityState::new(
            EntityId(10),
            PrefabId(100),
            "box.wooden.large",
            EntityKind::Storage,
        ));
        let container = world.add_container(Some(entity), 4, ContainerFlags::empty());
        (world, container)
    }

    #[test]
    fn split_rejects_full_and_zero_amounts() {
        let (mut world, container) = world_with_box();
        let item = world.insert_item(container, 0, wood(), 10).unwrap();

        assert!(world.split_item(item, 0).is_none());
        assert!(world.split_item(item, 10).is_none());

        let split = world.split_item(item, 4).unwrap();
        assert_eq!(world.item(item).unwrap().amount, 6);
        assert_eq!(world.item(split).unwrap().amount, 4);
        assert_eq!(world.item(split).unwrap().parent, None);
    }

    #[test]
    fn compatible_occupant_absorbs_moved_stack() {
        let (mut world, container) = world_with_box();
        let target = world.insert_item(container, 0, wood(), 900).unwrap();
        let moving = world.insert_item(container, 1, wood(), 500).unwrap();

        assert!(world.move_to_container(moving, container, Some(0)));
        assert!(world.item(moving).is_none());
        assert_eq!(world.item(target).unwrap().amount, 1400);
        assert_eq!(world.container(container).unwrap().slot(1), None);
    }

    #[test]
    fn locked_container_rejects_placement() {
        let (mut world, container) = world_with_box();
        world.set_container_flags(container, ContainerFlags::LOCKED);
        let item = world.create_item(wood(), 5);

        assert!(!world.move_to_container(item, container, None));
        assert_eq!(world.item(item).unwrap().parent, None);
    }

    #[test]
    fn registry_reports_storage_prefabs_sorted() {
        let registry = PrefabRegistry::new()
            .with_storage("woodbox_deployed", 2)
            .with_storage("box.wooden.large", 1)
            .with("assets/prefabs/player/player.prefab", 3);

        assert_eq!(
            registry.storage_prefabs(),
            vec!["box.wooden.large".to_string(), "woodbox_deployed".to_string()]
        );
        assert!(registry.is_registered(PrefabId(3)));
        assert!(!registry.is_registered(PrefabId(4)));
    }
}
