//! Move orchestration.
//!
//! A move request walks through validate, exclusion check, target resolution
//! and dispatch. Dispatch picks one of four strategies:
//!
//! | slot   | loot open | amount      | strategy               |
//! |--------|-----------|-------------|------------------------|
//! | auto   | no        | any         | right-click to target  |
//! | auto   | yes       | any         | shift to container     |
//! | given  | yes       | > base      | reslot with split      |
//! | given  | any       | otherwise   | prevent invalid merge  |
//!
//! Paths that change the world send exactly one inventory refresh.

use stack_core::{
    ActorId, ContainerId, Destination, EntityId, ItemId, ItemWorld, PlayerState, StackConfig,
    StackError, TransferError, is_excluded, split_move, swap,
};
use tracing::{debug, error, warn};

use crate::StackContext;
use crate::hooks::{MoveRequest, MoveVerdict};

/// A validated move with its target resolved.
struct MovePlan {
    item: ItemId,
    player: PlayerState,
    target: ContainerId,
    /// Set when the target is one of the player's open loot containers.
    loot: Option<ContainerId>,
    amount: u32,
}

impl StackContext {
    pub(crate) fn arbitrate_move(
        &mut self,
        world: &mut dyn ItemWorld,
        request: MoveRequest,
    ) -> MoveVerdict {
        let Some(player) = validate(world, &request) else {
            return MoveVerdict::NoOpinion;
        };
        let actor = request.actor;

        let source = world.owning_entity(request.item).map(|entity| entity.id);
        if is_excluded(world, source, actor) {
            log_excluded(world, source, actor);
            return MoveVerdict::NoOpinion;
        }

        let Some(target) = resolve_target(&player, source, request.target_container)
            .and_then(|id| player.find_container(id))
        else {
            return MoveVerdict::NoOpinion;
        };
        let target_entity = world.container_owner(target).map(|entity| entity.id);
        if source == target_entity {
            return MoveVerdict::NoOpinion;
        }
        if is_excluded(world, target_entity, actor) {
            log_excluded(world, target_entity, actor);
            return MoveVerdict::NoOpinion;
        }

        let Some(base) = world.item(request.item).map(|stack| stack.base_limit()) else {
            return MoveVerdict::NoOpinion;
        };
        let plan = MovePlan {
            item: request.item,
            loot: player.loot_container(target),
            player,
            target,
            amount: request.amount,
        };

        match (request.target_slot, plan.loot) {
            (None, None) => self.right_click(world, &plan),
            (None, Some(loot)) => self.shift_to_container(world, &plan, loot),
            (Some(slot), Some(_)) if plan.amount > base => self.reslot(world, &plan, slot),
            (Some(slot), _) => prevent_invalid_merge(world, &plan, slot),
        }
    }

    /// Fast-transfer intent: the grant (cached per actor) plus the held modifier.
    pub fn is_using_shift(&mut self, player: &PlayerState) -> bool {
        let permissions = self.oracles.permissions();
        let granted = self.shift.get_or_insert_with(player.actor, || {
            permissions.has_permission(player.actor, StackConfig::SHIFT_PERMISSION)
        });
        granted && player.modifier_held
    }

    /// Splits base-limit chunks off an overstack into the target container.
    ///
    /// With fast-transfer intent the loop runs until the stack is gone,
    /// otherwise once. The first failed placement ends the loop and the
    /// remainder stays where it was.
    fn right_click(&mut self, world: &mut dyn ItemWorld, plan: &MovePlan) -> MoveVerdict {
        let Some((amount, base)) = world
            .item(plan.item)
            .map(|stack| (stack.amount, stack.base_limit()))
        else {
            return MoveVerdict::NoOpinion;
        };
        if amount <= base {
            return MoveVerdict::NoOpinion;
        }

        let loops = if self.is_using_shift(&plan.player) {
            amount.div_ceil(base)
        } else {
            1
        };
        let destination = Destination::Slot {
            container: plan.target,
            slot: None,
        };

        let mut moved = false;
        for _ in 0..loops {
            let Some(remaining) = world.item(plan.item).map(|stack| stack.amount) else {
                break;
            };
            if remaining <= base {
                moved |= world.move_to_container(plan.item, plan.target, None);
                break;
            }
            match split_move(world, plan.item, base, destination) {
                Ok(_) => moved = true,
                Err(error) => {
                    self.report_transfer_failure(&error);
                    break;
                }
            }
        }

        if moved {
            if world.item(plan.item).is_some() {
                world.mark_dirty(plan.item);
            }
            world.server_update(plan.player.actor);
        }
        MoveVerdict::Handled
    }

    /// Moves every other stack of the same type from main and belt into the
    /// open container, stopping at the first rejection.
    ///
    /// The clicked stack itself is left to the native handler.
    fn shift_to_container(
        &mut self,
        world: &mut dyn ItemWorld,
        plan: &MovePlan,
        loot: ContainerId,
    ) -> MoveVerdict {
        if !self.is_using_shift(&plan.player) {
            return MoveVerdict::NoOpinion;
        }
        let Some(item_type) = world
            .item(plan.item)
            .map(|stack| stack.definition.item_type)
        else {
            return MoveVerdict::NoOpinion;
        };

        let mut candidates = Vec::new();
        for section in [plan.player.main, plan.player.belt] {
            let Some(container) = world.container(section) else {
                continue;
            };
            candidates.extend(container.items().filter(|&id| {
                id != plan.item
                    && world
                        .item(id)
                        .is_some_and(|stack| stack.definition.item_type == item_type)
            }));
        }

        let mut moved = 0usize;
        for id in candidates {
            if !world.move_to_container(id, loot, None) {
                break;
            }
            moved += 1;
        }

        if moved > 0 {
            debug!(
                target: "stack::moves",
                actor = %plan.player.actor,
                container = %loot,
                moved,
                "Batch moved stacks into container"
            );
            world.server_update(plan.player.actor);
        }
        MoveVerdict::NoOpinion
    }

    /// Places a requested amount larger than the native limit into a slot of
    /// the open container.
    fn reslot(&mut self, world: &mut dyn ItemWorld, plan: &MovePlan, slot: usize) -> MoveVerdict {
        let Some(stack_amount) = world.item(plan.item).map(|stack| stack.amount) else {
            return MoveVerdict::NoOpinion;
        };
        let occupant = world
            .container(plan.target)
            .and_then(|container| container.slot(slot));

        let result = match occupant {
            None if plan.amount < stack_amount => {
                let destination = Destination::Slot {
                    container: plan.target,
                    slot: Some(slot),
                };
                split_move(world, plan.item, plan.amount, destination).map(|_| ())
            }
            None => {
                world.move_to_container(plan.item, plan.target, Some(slot));
                Ok(())
            }
            Some(occupant) => {
                let compatible = match (world.item(occupant), world.item(plan.item)) {
                    (Some(existing), Some(moving)) => existing.can_stack(moving),
                    _ => false,
                };
                if !compatible && plan.amount == stack_amount {
                    swap(world, plan.item, occupant)
                } else if plan.amount < stack_amount {
                    let destination = Destination::Player(plan.player.actor);
                    split_move(world, plan.item, plan.amount, destination).map(|_| ())
                } else {
                    world.move_to_container(plan.item, plan.target, Some(slot));
                    Ok(())
                }
            }
        };
        if let Err(error) = result {
            self.report_transfer_failure(&error);
        }

        world.server_update(plan.player.actor);
        MoveVerdict::Handled
    }

    fn report_transfer_failure(&self, error: &TransferError) {
        let severity = error.severity();
        if severity.is_internal() {
            error!(
                target: "stack::moves",
                code = error.error_code(),
                severity = severity.as_str(),
                "Failed to move item: {}", error
            );
        } else if self.store.debug() {
            warn!(
                target: "stack::moves",
                code = error.error_code(),
                severity = severity.as_str(),
                "Failed to move item: {}", error
            );
        } else {
            debug!(
                target: "stack::moves",
                code = error.error_code(),
                "Failed to move item: {}", error
            );
        }
    }
}

fn log_excluded(world: &dyn ItemWorld, entity: Option<EntityId>, actor: ActorId) {
    if let Some(state) = entity.and_then(|id| world.entity(id)) {
        debug!(
            target: "stack::moves",
            actor = %actor,
            entity = %state.id,
            kind = state.kind_name(),
            "Move touches an excluded entity"
        );
    }
}

fn validate(world: &dyn ItemWorld, request: &MoveRequest) -> Option<PlayerState> {
    world.item(request.item)?;
    let player = world.player(request.actor)?;
    if !world.entity(player.entity)?.is_valid() {
        return None;
    }
    Some(player.clone())
}

/// Container an unset target refers to.
///
/// From the player's own inventory the first open loot container is used;
/// from the loot source the player's main inventory is used.
fn resolve_target(
    player: &PlayerState,
    source: Option<EntityId>,
    requested: ContainerId,
) -> Option<ContainerId> {
    if !requested.is_unset() {
        return Some(requested);
    }
    let source = source?;
    if source == player.entity {
        player.loot.containers.first().copied()
    } else if player.loot.source == Some(source) {
        Some(player.main)
    } else {
        None
    }
}

/// Vetoes dropping a player's stack onto an incompatible overstacked slot.
fn prevent_invalid_merge(world: &dyn ItemWorld, plan: &MovePlan, slot: usize) -> MoveVerdict {
    if plan.loot.is_none() {
        return MoveVerdict::NoOpinion;
    }
    let Some(occupant) = world
        .container(plan.target)
        .and_then(|container| container.slot(slot))
    else {
        return MoveVerdict::NoOpinion;
    };
    let (Some(existing), Some(moving)) = (world.item(occupant), world.item(plan.item)) else {
        return MoveVerdict::NoOpinion;
    };

    let owned: Option<ActorId> = world.owner_player(plan.item);
    if existing.is_overstacked() && owned == Some(plan.player.actor) && !moving.can_stack(existing)
    {
        debug!(
            target: "stack::moves",
            actor = %plan.player.actor,
            item = %plan.item,
            occupant = %occupant,
            "Vetoed merge into overstacked slot"
        );
        return MoveVerdict::Veto;
    }
    MoveVerdict::NoOpinion
}
