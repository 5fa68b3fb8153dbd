//! Entry points the host simulation invokes on inventory events.
//!
//! The host owns the event loop and calls into [`StackHooks`] synchronously
//! from its callback dispatch. Each entry point runs to completion before it
//! returns: every multi-step transfer either finishes a step or rolls it back,
//! so a stack is never left half-moved between calls.
//!
//! # Entry points
//!
//! - [`StackHooks::on_max_stackable`]: per-slot limit override for an item
//! - [`StackHooks::can_move_item`]: arbitrates a player move, possibly
//!   performing it here and vetoing the native handler
//! - [`StackHooks::on_item_dropped`]: splits an overstack leaving a container
//! - [`StackHooks::on_container_opened`]: remembers backpack containers
//! - [`StackHooks::on_player_disconnected`]: forgets per-actor caches
//!
//! None of them return errors. Missing or destroyed references fall back to
//! the host's native behavior.

mod backpack;
mod drop;
mod limits;
mod moves;

use stack_core::{ActorId, ContainerId, EntityId, ItemId, ItemWorld, LimitOverride};

use crate::StackContext;

/// A player-initiated item move as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub item: ItemId,
    /// Player whose inventory issued the move.
    pub actor: ActorId,
    /// Requested container; [`ContainerId::UNSET`] lets the policy pick one.
    pub target_container: ContainerId,
    /// Requested slot; `None` means auto-place (right-click).
    pub target_slot: Option<usize>,
    pub amount: u32,
}

impl MoveRequest {
    pub fn new(item: ItemId, actor: ActorId) -> Self {
        Self {
            item,
            actor,
            target_container: ContainerId::UNSET,
            target_slot: None,
            amount: 0,
        }
    }

    pub fn to_container(mut self, container: ContainerId) -> Self {
        self.target_container = container;
        self
    }

    pub fn to_slot(mut self, slot: usize) -> Self {
        self.target_slot = Some(slot);
        self
    }

    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }
}

/// Outcome of a move arbitration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveVerdict {
    /// Let the native handler process the move.
    NoOpinion,
    /// Block the move; nothing was changed.
    Veto,
    /// The transfer was carried out here; the native handler must not run.
    Handled,
}

impl MoveVerdict {
    /// Returns true when the native handler must be skipped.
    pub fn blocks_native(self) -> bool {
        !matches!(self, Self::NoOpinion)
    }
}

/// Event entry points of the stack policy.
pub trait StackHooks {
    /// Effective per-slot limit for `item` in its current container.
    fn on_max_stackable(&mut self, world: &dyn ItemWorld, item: ItemId) -> LimitOverride;

    fn can_move_item(&mut self, world: &mut dyn ItemWorld, request: MoveRequest) -> MoveVerdict;

    /// Called when `item` leaves a container of `source` onto the ground.
    fn on_item_dropped(&mut self, world: &mut dyn ItemWorld, item: ItemId, source: EntityId);

    fn on_container_opened(
        &mut self,
        world: &dyn ItemWorld,
        actor: ActorId,
        container: ContainerId,
    );

    fn on_player_disconnected(&mut self, actor: ActorId);
}

impl StackHooks for StackContext {
    fn on_max_stackable(&mut self, world: &dyn ItemWorld, item: ItemId) -> LimitOverride {
        self.max_stackable(world, item)
    }

    fn can_move_item(&mut self, world: &mut dyn ItemWorld, request: MoveRequest) -> MoveVerdict {
        self.arbitrate_move(world, request)
    }

    fn on_item_dropped(&mut self, world: &mut dyn ItemWorld, item: ItemId, source: EntityId) {
        self.split_dropped(world, item, source);
    }

    fn on_container_opened(
        &mut self,
        world: &dyn ItemWorld,
        actor: ActorId,
        container: ContainerId,
    ) {
        self.register_backpack(world, actor, container);
    }

    fn on_player_disconnected(&mut self, actor: ActorId) {
        if self.shift.evict(actor).is_some() {
            tracing::debug!(target: "stack::hooks", actor = %actor, "Evicted fast-transfer grant");
        }
    }
}
