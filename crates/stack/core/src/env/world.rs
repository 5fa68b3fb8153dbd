use crate::state::{
    ActorId, Container, ContainerId, EntityId, EntityState, ItemId, ItemStack, PlayerState,
    Vector3,
};

/// Slot/container storage engine owned by the host simulation.
///
/// Every mutation either completes or leaves the world untouched and reports
/// failure; the transfer primitives rely on that to roll back partial steps.
pub trait ItemWorld {
    fn item(&self, id: ItemId) -> Option<&ItemStack>;

    fn container(&self, id: ContainerId) -> Option<&Container>;

    fn entity(&self, id: EntityId) -> Option<&EntityState>;

    fn player(&self, actor: ActorId) -> Option<&PlayerState>;

    /// Returns true if `actor` may currently use the access-gated `entity`.
    fn is_access_authorized(&self, entity: EntityId, actor: ActorId) -> bool;

    /// Removes `amount` from the stack and returns it as a new unparented stack.
    ///
    /// Fails when `amount` is zero or not smaller than the stack amount.
    fn split_item(&mut self, item: ItemId, amount: u32) -> Option<ItemId>;

    /// Places the stack into `container`. `slot == None` picks any free slot.
    ///
    /// An occupied slot holding a compatible stack absorbs the moved stack,
    /// which then ceases to exist.
    fn move_to_container(
        &mut self,
        item: ItemId,
        container: ContainerId,
        slot: Option<usize>,
    ) -> bool;

    /// Places the stack anywhere in the player's inventory.
    fn give_item(&mut self, actor: ActorId, item: ItemId) -> bool;

    /// Detaches the stack from its container; the stack keeps existing.
    fn remove_from_container(&mut self, item: ItemId);

    fn add_amount(&mut self, item: ItemId, amount: u32);

    /// Destroys the stack entirely.
    fn destroy_item(&mut self, item: ItemId);

    /// Spawns the stack as a physical ground object.
    fn drop_item(&mut self, item: ItemId, position: Vector3, velocity: Vector3) -> bool;

    fn mark_dirty(&mut self, item: ItemId);

    /// Sends one inventory refresh to the player's client.
    fn server_update(&mut self, actor: ActorId);

    /// Entity that owns the container holding `item`.
    fn owning_entity(&self, item: ItemId) -> Option<&EntityState> {
        let parent = self.item(item)?.parent?;
        let owner = self.container(parent)?.owner?;
        self.entity(owner)
    }

    /// Player whose core inventory currently holds `item`.
    fn owner_player(&self, item: ItemId) -> Option<ActorId> {
        let parent = self.item(item)?.parent?;
        let container = self.container(parent)?;
        if !container.is_player_inventory() {
            return None;
        }
        self.entity(container.owner?)?.actor()
    }

    /// Entity owning `container`.
    fn container_owner(&self, container: ContainerId) -> Option<&EntityState> {
        self.entity(self.container(container)?.owner?)
    }
}
