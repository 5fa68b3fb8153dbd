#![allow(dead_code)]

use std::sync::Arc;

use stack_core::{
    ActorId, ContainerFlags, ContainerId, EntityId, EntityKind, EntityState, ItemDefinition,
    ItemTypeId, ItemWorld, MemoryWorld, PrefabId, PrefabRegistry, StackConfig, Vector3,
};
use stack_runtime::{
    InMemoryConfigRepo, MoveRequest, MoveVerdict, OracleManager, PermissionOracleImpl,
    StackContext, StackHooks,
};

pub const ACTOR: ActorId = ActorId(76561198000000001);
pub const PLAYER_ENTITY: EntityId = EntityId(1);
pub const BOX_ENTITY: EntityId = EntityId(2);

pub const PLAYER_PREFAB_ID: u32 = 4108;
pub const BOX_PREFAB: &str = "box.wooden.large";
pub const BOX_PREFAB_ID: u32 = 2206;
pub const FURNACE_PREFAB: &str = "furnace";
pub const FURNACE_PREFAB_ID: u32 = 2931;
pub const LOCKER_PREFAB: &str = "locker.deployed";
pub const LOCKER_PREFAB_ID: u32 = 3120;
pub const VENDING_PREFAB: &str = "vendingmachine.deployed";
pub const VENDING_PREFAB_ID: u32 = 3400;
pub const BACKPACK_PREFAB: &str = "item_drop_backpack";
pub const BACKPACK_PREFAB_ID: u32 = 3500;
pub const CLOSEST_ID: u32 = 5000;

pub const WOOD: ItemTypeId = ItemTypeId(-151838493);
pub const STONES: ItemTypeId = ItemTypeId(-2099697608);

pub const BOX_SLOTS: usize = 6;

/// Native limit 20.
pub fn wood() -> ItemDefinition {
    ItemDefinition::new(WOOD, "wood", 20)
}

/// Native limit 100.
pub fn stones() -> ItemDefinition {
    ItemDefinition::new(STONES, "stones", 100)
}

pub fn prefabs() -> PrefabRegistry {
    PrefabRegistry::new()
        .with(StackConfig::PLAYER_PREFAB, PLAYER_PREFAB_ID)
        .with_storage(BOX_PREFAB, BOX_PREFAB_ID)
        .with_storage(FURNACE_PREFAB, FURNACE_PREFAB_ID)
        .with_storage(LOCKER_PREFAB, LOCKER_PREFAB_ID)
        .with(VENDING_PREFAB, VENDING_PREFAB_ID)
        .with(BACKPACK_PREFAB, BACKPACK_PREFAB_ID)
        .with_closest(CLOSEST_ID)
}

/// Box at 2.0, everything else at the default.
pub fn config() -> StackConfig {
    StackConfig::new()
        .with_multiplier(BOX_PREFAB, 2.0)
        .with_multiplier(FURNACE_PREFAB, 1.0)
        .with_multiplier(LOCKER_PREFAB, 1.0)
        .with_multiplier(StackConfig::BACKPACK_KEY, 1.0)
}

pub fn oracles(shift_granted: bool) -> OracleManager {
    let mut permissions = PermissionOracleImpl::new();
    if shift_granted {
        permissions.grant(ACTOR, StackConfig::SHIFT_PERMISSION);
    }
    OracleManager::new(Arc::new(prefabs()), Arc::new(permissions))
}

pub struct Fixture {
    pub world: MemoryWorld,
    pub ctx: StackContext,
    pub repo: Arc<InMemoryConfigRepo>,
    pub box_container: ContainerId,
}

impl Fixture {
    pub fn new() -> Self {
        Self::build(config(), false)
    }

    /// Player holds the fast-transfer grant and the modifier key.
    pub fn with_shift() -> Self {
        let mut fixture = Self::build(config(), true);
        fixture.world.set_modifier_held(ACTOR, true);
        fixture
    }

    pub fn build(config: StackConfig, shift_granted: bool) -> Self {
        let mut world = MemoryWorld::new();
        world.spawn_player(
            ACTOR,
            EntityState::new(
                PLAYER_ENTITY,
                PrefabId(PLAYER_PREFAB_ID),
                StackConfig::PLAYER_PREFAB,
                EntityKind::Player { actor: ACTOR },
            ),
        );
        world.add_entity(
            EntityState::new(
                BOX_ENTITY,
                PrefabId(BOX_PREFAB_ID),
                BOX_PREFAB,
                EntityKind::Storage,
            )
            .at(Vector3::new(10.0, 2.0, -4.0), Vector3::new(0.0, 1.0, 0.0)),
        );
        let box_container =
            world.add_container(Some(BOX_ENTITY), BOX_SLOTS, ContainerFlags::empty());

        let repo = Arc::new(InMemoryConfigRepo::new());
        let ctx = StackContext::builder()
            .config(config)
            .oracles(oracles(shift_granted))
            .repository(repo.clone())
            .seed(7)
            .build()
            .unwrap();

        Self {
            world,
            ctx,
            repo,
            box_container,
        }
    }

    pub fn open_box(&mut self) {
        self.world
            .open_loot(ACTOR, BOX_ENTITY, vec![self.box_container]);
    }

    pub fn move_item(&mut self, request: MoveRequest) -> MoveVerdict {
        self.ctx.can_move_item(&mut self.world, request)
    }

    pub fn main(&self) -> ContainerId {
        self.world.player(ACTOR).unwrap().main
    }

    pub fn belt(&self) -> ContainerId {
        self.world.player(ACTOR).unwrap().belt
    }

    /// Adds a storage entity with one container.
    pub fn add_storage(
        &mut self,
        id: u64,
        prefab: &str,
        prefab_id: u32,
        kind: EntityKind,
    ) -> (EntityId, ContainerId) {
        let entity = self.world.add_entity(EntityState::new(
            EntityId(id),
            PrefabId(prefab_id),
            prefab,
            kind,
        ));
        let container = self
            .world
            .add_container(Some(entity), BOX_SLOTS, ContainerFlags::empty());
        (entity, container)
    }
}

/// Amounts of the stacks in `container`, by slot order.
pub fn amounts(world: &MemoryWorld, container: ContainerId) -> Vec<u32> {
    world
        .container(container)
        .map(|c| {
            c.slots
                .iter()
                .flatten()
                .filter_map(|id| world.item(*id).map(|stack| stack.amount))
                .collect()
        })
        .unwrap_or_default()
}
