mod common;

use common::*;
use stack_core::{ItemWorld, StackConfig, Vector3};
use stack_runtime::StackHooks;

#[test]
fn overstack_in_box_drops_limit_sized_stacks() {
    let mut fx = Fixture::new();
    let item = fx.world.insert_item(fx.box_container, 0, wood(), 45).unwrap();

    fx.ctx.on_item_dropped(&mut fx.world, item, BOX_ENTITY);

    let dropped: Vec<u32> = fx.world.dropped().iter().map(|d| d.amount).collect();
    assert_eq!(dropped, vec![40]);
    assert_eq!(fx.world.item(item).unwrap().amount, 5);
    assert_eq!(fx.world.item(item).unwrap().parent, None);
    assert_eq!(fx.world.total_amount(WOOD), 45);
}

#[test]
fn stack_within_limit_is_not_split() {
    let mut fx = Fixture::new();
    let item = fx.world.insert_item(fx.box_container, 0, wood(), 30).unwrap();

    fx.ctx.on_item_dropped(&mut fx.world, item, BOX_ENTITY);

    assert!(fx.world.dropped().is_empty());
    assert_eq!(fx.world.item(item).unwrap().amount, 30);
}

#[test]
fn player_inventory_drop_uses_native_limit() {
    let mut fx = Fixture::new();
    let main = fx.main();
    let item = fx.world.insert_item(main, 0, wood(), 45).unwrap();

    fx.ctx.on_item_dropped(&mut fx.world, item, PLAYER_ENTITY);

    let dropped: Vec<u32> = fx.world.dropped().iter().map(|d| d.amount).collect();
    assert_eq!(dropped, vec![20, 20]);
    assert_eq!(fx.world.item(item).unwrap().amount, 5);
}

#[test]
fn oversized_stack_is_left_whole() {
    let mut fx = Fixture::new();
    let amount = 40 * (StackConfig::MAX_DROP_LOOPS + 2);
    let item = fx
        .world
        .insert_item(fx.box_container, 0, wood(), amount)
        .unwrap();

    fx.ctx.on_item_dropped(&mut fx.world, item, BOX_ENTITY);

    assert!(fx.world.dropped().is_empty());
    assert_eq!(fx.world.item(item).unwrap().amount, amount);
}

#[test]
fn drops_never_exceed_loop_bound_and_conserve_amount() {
    for amount in (1..=40 * StackConfig::MAX_DROP_LOOPS).step_by(7) {
        let mut fx = Fixture::new();
        let item = fx
            .world
            .insert_item(fx.box_container, 0, wood(), amount)
            .unwrap();

        fx.ctx.on_item_dropped(&mut fx.world, item, BOX_ENTITY);

        let dropped = fx.world.dropped();
        assert!(dropped.len() <= StackConfig::MAX_DROP_LOOPS as usize);
        assert!(dropped.iter().all(|d| d.amount == 40));
        let remainder = fx.world.item(item).unwrap().amount;
        assert!(remainder <= 40, "amount {amount} left {remainder}");
        assert_eq!(fx.world.total_amount(WOOD), u64::from(amount));
    }
}

#[test]
fn drops_scatter_around_the_source() {
    let mut fx = Fixture::new();
    let item = fx.world.insert_item(fx.box_container, 0, wood(), 200).unwrap();

    fx.ctx.on_item_dropped(&mut fx.world, item, BOX_ENTITY);

    let origin = Vector3::new(10.0, 2.0, -4.0);
    let base_velocity = Vector3::new(0.0, 1.0, 0.0);
    assert_eq!(fx.world.dropped().len(), 4);
    for drop in fx.world.dropped() {
        assert_eq!(drop.position, origin);
        assert!((drop.velocity.x - base_velocity.x).abs() <= 1.0);
        assert!((drop.velocity.y - base_velocity.y).abs() <= 1.0);
        assert!((drop.velocity.z - base_velocity.z).abs() <= 1.0);
    }
}

#[test]
fn seeded_context_scatters_reproducibly() {
    let velocities = || {
        let mut fx = Fixture::new();
        let item = fx.world.insert_item(fx.box_container, 0, wood(), 200).unwrap();
        fx.ctx.on_item_dropped(&mut fx.world, item, BOX_ENTITY);
        fx.world
            .dropped()
            .iter()
            .map(|d| d.velocity)
            .collect::<Vec<_>>()
    };

    assert_eq!(velocities(), velocities());
}

#[test]
fn destroyed_source_is_ignored() {
    let mut fx = Fixture::new();
    let item = fx.world.insert_item(fx.box_container, 0, wood(), 45).unwrap();
    fx.world.destroy_entity(BOX_ENTITY);

    fx.ctx.on_item_dropped(&mut fx.world, item, BOX_ENTITY);

    assert!(fx.world.dropped().is_empty());
    assert_eq!(fx.world.item(item).unwrap().parent, Some(fx.box_container));
}
