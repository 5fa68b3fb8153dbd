use stack_core::{ActorId, ContainerFlags, ContainerId, ItemWorld};
use tracing::{debug, warn};

use crate::StackContext;

impl StackContext {
    pub(crate) fn register_backpack(
        &mut self,
        world: &dyn ItemWorld,
        actor: ActorId,
        container: ContainerId,
    ) {
        let Some(state) = world.container(container) else {
            return;
        };
        if !state.flags.contains(ContainerFlags::BACKPACK)
            || self.backpacks.contains_container(container)
        {
            return;
        }

        let owner = state
            .owner
            .and_then(|id| world.entity(id))
            .filter(|entity| entity.is_valid());
        if let Some(entity) = owner
            && self.backpacks.register(container, entity.id)
        {
            debug!(
                target: "stack::hooks",
                actor = %actor,
                container = %container,
                entity = %entity.id,
                "Backpack registered"
            );
            return;
        }

        if self.store.debug() {
            let already_cached =
                owner.is_some_and(|entity| self.backpacks.contains_entity(entity.id));
            warn!(
                target: "stack::hooks",
                actor = %actor,
                container = %container,
                entity_valid = owner.is_some(),
                already_cached,
                "Failed to cache backpack"
            );
        }
    }
}
