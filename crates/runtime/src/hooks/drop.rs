//! Drop splitting.

use rand::Rng;
use stack_core::{DropPlan, EntityId, ItemId, ItemWorld, Vector3, merge_back, plan_drop};
use tracing::{debug, warn};

use crate::StackContext;

impl StackContext {
    /// Breaks an overstack leaving `source` into limit-sized ground stacks.
    ///
    /// The limit is the one in effect inside the source container, taken
    /// before the stack is detached. The original stack keeps the remainder
    /// and is dropped by the host afterwards.
    pub(crate) fn split_dropped(
        &mut self,
        world: &mut dyn ItemWorld,
        item: ItemId,
        source: EntityId,
    ) {
        let Some((position, velocity)) = world
            .entity(source)
            .filter(|entity| entity.is_valid())
            .map(|entity| (entity.position, entity.velocity))
        else {
            return;
        };
        let Some(base) = world.item(item).map(|stack| stack.base_limit()) else {
            return;
        };
        let limit = self.max_stackable(world, item).resolve(base);

        world.remove_from_container(item);
        let Some(amount) = world.item(item).map(|stack| stack.amount) else {
            return;
        };

        let loops = match plan_drop(amount, limit) {
            DropPlan::WithinLimit => return,
            DropPlan::TooLarge { loops } => {
                warn!(
                    target: "stack::drop",
                    item = %item,
                    amount,
                    limit,
                    loops,
                    "Overstack too large to split, dropping as one stack"
                );
                return;
            }
            DropPlan::Split { loops } => loops,
        };

        let mut dropped = 0u32;
        for _ in 0..loops {
            if world.item(item).is_none_or(|stack| stack.amount <= limit) {
                break;
            }
            let Some(split) = world.split_item(item, limit) else {
                break;
            };
            let scatter = self.drop_scatter();
            if !world.drop_item(split, position, velocity + scatter) {
                merge_back(world, item, split);
                break;
            }
            dropped += 1;
        }

        debug!(
            target: "stack::drop",
            item = %item,
            amount,
            limit,
            dropped,
            "Split overstack on drop"
        );
    }

    fn drop_scatter(&mut self) -> Vector3 {
        Vector3::new(
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
            self.rng.gen_range(-1.0..=1.0),
        )
    }
}
