use crate::env::ItemWorld;
use crate::state::{ActorId, ContainerId, ItemId};
use crate::transfer::TransferError;

/// Where a stack is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// A container slot; `None` lets the world pick a free slot.
    Slot {
        container: ContainerId,
        slot: Option<usize>,
    },
    /// Anywhere in the player's inventory.
    Player(ActorId),
}

/// Places `item` at `destination`.
pub fn place(world: &mut dyn ItemWorld, item: ItemId, destination: Destination) -> bool {
    match destination {
        Destination::Slot { container, slot } => world.move_to_container(item, container, slot),
        Destination::Player(actor) => world.give_item(actor, item),
    }
}

/// Returns the amount of `split` to `original` and discards `split`.
pub fn merge_back(world: &mut dyn ItemWorld, original: ItemId, split: ItemId) {
    let amount = world.item(split).map_or(0, |stack| stack.amount);
    world.add_amount(original, amount);
    world.destroy_item(split);
}

/// Splits `amount` off `item` and places the new stack at `destination`.
///
/// On placement failure the split part is merged back and discarded, leaving
/// `item` exactly as it was.
pub fn split_move(
    world: &mut dyn ItemWorld,
    item: ItemId,
    amount: u32,
    destination: Destination,
) -> Result<ItemId, TransferError> {
    if world.item(item).is_none() {
        return Err(TransferError::ItemNotFound(item));
    }
    let split = world
        .split_item(item, amount)
        .ok_or(TransferError::SplitRejected { item, amount })?;

    if place(world, split, destination) {
        Ok(split)
    } else {
        merge_back(world, item, split);
        Err(TransferError::PlacementRejected { item, amount })
    }
}

/// Exchanges the container/slot positions of two stacks.
///
/// Both stacks are removed, then each is placed where the other was. If either
/// placement fails both are put back where they started. Stacks in a locked
/// container are never touched.
///
/// Returns [`TransferError::RollbackFailed`] when the world refuses to take a
/// stack back into its original slot.
pub fn swap(world: &mut dyn ItemWorld, first: ItemId, second: ItemId) -> Result<(), TransferError> {
    let position = |world: &dyn ItemWorld, item: ItemId| {
        let stack = world.item(item).ok_or(TransferError::ItemNotFound(item))?;
        match (stack.parent, stack.slot) {
            (Some(container), Some(slot))
                if world.container(container).is_some_and(|c| !c.is_locked()) =>
            {
                Ok((container, slot))
            }
            _ => Err(TransferError::SwapRejected { first, second }),
        }
    };
    let (first_container, first_slot) = position(world, first)?;
    let (second_container, second_slot) = position(world, second)?;

    world.remove_from_container(first);
    world.remove_from_container(second);

    let placed_first = world.move_to_container(first, second_container, Some(second_slot));
    let placed_second = world.move_to_container(second, first_container, Some(first_slot));
    if placed_first && placed_second {
        return Ok(());
    }

    world.remove_from_container(first);
    world.remove_from_container(second);
    let restored_first = world.move_to_container(first, first_container, Some(first_slot));
    let restored_second = world.move_to_container(second, second_container, Some(second_slot));
    if restored_first && restored_second {
        Err(TransferError::SwapRejected { first, second })
    } else {
        Err(TransferError::RollbackFailed { first, second })
    }
}
