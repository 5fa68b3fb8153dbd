//! Stack-limit resolution.

use stack_core::{
    Container, ContentsType, EntityId, EntityState, ItemId, ItemWorld, LimitOverride, StackConfig,
    is_multiplier_eligible, limit_override,
};

use crate::StackContext;

impl StackContext {
    /// Limit override for `item` in the container it currently sits in.
    ///
    /// Non-stackable and liquid items, items outside any valid entity, and
    /// multipliers of exactly 1.0 all report [`LimitOverride::Native`].
    pub fn max_stackable(&mut self, world: &dyn ItemWorld, item: ItemId) -> LimitOverride {
        let Some(stack) = world.item(item) else {
            return LimitOverride::Native;
        };
        let definition = &stack.definition;
        if !definition.is_stackable() || definition.contents == ContentsType::Liquid {
            return LimitOverride::Native;
        }
        let Some(entity) = world.owning_entity(item).filter(|entity| entity.is_valid()) else {
            return LimitOverride::Native;
        };
        let in_core_inventory = stack
            .parent
            .and_then(|parent| world.container(parent))
            .is_some_and(Container::is_player_inventory);

        let multiplier = self.item_multiplier(entity, in_core_inventory);
        limit_override(multiplier, stack.base_limit())
    }

    /// Multiplier applied to containers of `entity`; 1.0 when it is absent.
    pub fn chest_multiplier(&mut self, world: &dyn ItemWorld, entity: Option<EntityId>) -> f32 {
        match entity.and_then(|id| world.entity(id)) {
            Some(state) => self.entity_multiplier(state),
            None => StackConfig::DEFAULT_MULTIPLIER,
        }
    }

    fn item_multiplier(&mut self, entity: &EntityState, in_core_inventory: bool) -> f32 {
        // containers hanging off a player body that are not the core sections
        if self.ids.player == Some(entity.prefab_id) && !in_core_inventory {
            return self.backpack_multiplier();
        }
        self.entity_multiplier(entity)
    }

    fn entity_multiplier(&mut self, entity: &EntityState) -> f32 {
        if !is_multiplier_eligible(entity) {
            return StackConfig::DEFAULT_MULTIPLIER;
        }
        if self.backpacks.contains_entity(entity.id) {
            return self.backpack_multiplier();
        }
        if let Some(multiplier) = self.multipliers.get(entity.prefab_id) {
            return multiplier;
        }
        let multiplier = self.store.resolve(&entity.prefab_name);
        self.multipliers.insert(entity.prefab_id, multiplier);
        multiplier
    }

    fn backpack_multiplier(&self) -> f32 {
        self.multipliers
            .get(self.ids.backpack)
            .unwrap_or(StackConfig::DEFAULT_MULTIPLIER)
    }
}
