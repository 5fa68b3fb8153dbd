use crate::env::ItemWorld;
use crate::state::{ActorId, EntityId, EntityKind, EntityState};

/// Returns true when the stack policy must stay out of moves touching `entity`.
///
/// Covers missing or destroyed entities, locked entities, gambling terminals,
/// shop fronts, and vending machines the actor is not authorized to operate.
pub fn is_excluded(world: &dyn ItemWorld, entity: Option<EntityId>, actor: ActorId) -> bool {
    let Some(state) = entity.and_then(|id| world.entity(id)) else {
        return true;
    };
    if !state.is_valid() || state.is_locked() {
        return true;
    }
    match state.kind {
        EntityKind::BettingTerminal | EntityKind::ShopFront => true,
        EntityKind::VendingMachine => !world.is_access_authorized(state.id, actor),
        EntityKind::Player { .. }
        | EntityKind::Corpse
        | EntityKind::LootContainer
        | EntityKind::Storage => false,
    }
}

/// Player bodies, corpses and world loot always keep the native limit.
pub fn is_multiplier_eligible(entity: &EntityState) -> bool {
    !matches!(
        entity.kind,
        EntityKind::Player { .. } | EntityKind::Corpse | EntityKind::LootContainer
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryWorld;
    use crate::state::{EntityFlags, PrefabId};

    const ACTOR: ActorId = ActorId(7);

    fn spawn(world: &mut MemoryWorld, id: u64, kind: EntityKind) -> EntityId {
        world.add_entity(EntityState::new(EntityId(id), PrefabId(id as u32), "prefab", kind))
    }

    #[test]
    fn missing_and_destroyed_entities_are_excluded() {
        let mut world = MemoryWorld::new();
        let entity = spawn(&mut world, 1, EntityKind::Storage);

        assert!(is_excluded(&world, None, ACTOR));
        assert!(is_excluded(&world, Some(EntityId(99)), ACTOR));
        assert!(!is_excluded(&world, Some(entity), ACTOR));

        world.destroy_entity(entity);
        assert!(is_excluded(&world, Some(entity), ACTOR));
    }

    #[test]
    fn locked_entities_are_excluded() {
        let mut world = MemoryWorld::new();
        let entity = world.add_entity(
            EntityState::new(EntityId(1), PrefabId(1), "locker", EntityKind::Storage)
                .with_flags(EntityFlags::LOCKED),
        );

        assert!(is_excluded(&world, Some(entity), ACTOR));
    }

    #[test]
    fn gambling_and_shop_entities_are_always_excluded() {
        let mut world = MemoryWorld::new();
        let terminal = spawn(&mut world, 1, EntityKind::BettingTerminal);
        let shop = spawn(&mut world, 2, EntityKind::ShopFront);
        world.authorize(terminal, ACTOR);

        assert!(is_excluded(&world, Some(terminal), ACTOR));
        assert!(is_excluded(&world, Some(shop), ACTOR));
    }

    #[test]
    fn vending_machine_requires_authorization() {
        let mut world = MemoryWorld::new();
        let machine = spawn(&mut world, 1, EntityKind::VendingMachine);

        assert!(is_excluded(&world, Some(machine), ACTOR));
        world.authorize(machine, ACTOR);
        assert!(!is_excluded(&world, Some(machine), ACTOR));
        assert!(is_excluded(&world, Some(machine), ActorId(8)));
    }

    #[test]
    fn eligibility_rejects_players_corpses_and_loot() {
        let eligible = |kind| {
            is_multiplier_eligible(&EntityState::new(EntityId(1), PrefabId(1), "x", kind))
        };

        assert!(!eligible(EntityKind::Player { actor: ACTOR }));
        assert!(!eligible(EntityKind::Corpse));
        assert!(!eligible(EntityKind::LootContainer));
        assert!(eligible(EntityKind::Storage));
        assert!(eligible(EntityKind::VendingMachine));
    }
}
