// Inventory interaction scenarios
//
// End-to-end checks of the held-stack state machine through the public API.

use glam::Vec2;
use magiland::item::{ItemDefinition, ItemId, ItemKind, ItemRegistry};
use magiland::{InteractionState, Inventory, ItemStack, PointerButton, SlotAction, UnknownItemError};

fn registry() -> ItemRegistry {
    ItemRegistry::from_definitions([
        ItemDefinition::material(ItemId(1), "ore"),
        ItemDefinition::material(ItemId(2), "herb"),
        ItemDefinition::material(ItemId(3), "gem"),
        ItemDefinition::new(ItemId(9), "staff", false, ItemKind::Material),
    ])
    .expect("registry ids are unique")
}

fn stack(registry: &ItemRegistry, id: u32, count: u32) -> ItemStack<'_> {
    ItemStack::new(registry, ItemId(id), count).expect("item is registered")
}

fn summary(stack: Option<&ItemStack<'_>>) -> Option<(u32, u32)> {
    stack.map(|s| (s.item_id().0, s.count()))
}

/// N=4, W=2 grid of 16px cells
fn small_inventory<'r>() -> Inventory<'r> {
    Inventory::new(4, 2, Vec2::splat(16.0)).expect("valid layout")
}

#[test]
fn test_unknown_item_always_fails() {
    let registry = registry();
    for id in [0, 4, 8, 10, u32::MAX] {
        let result = ItemStack::new(&registry, ItemId(id), 1);
        assert_eq!(result.unwrap_err(), UnknownItemError { item_id: ItemId(id) });
    }
}

#[test]
fn test_merge_then_exchange_scenario() {
    let registry = registry();
    let mut inventory = small_inventory();

    inventory.set_slot(0, Some(stack(&registry, 1, 2)));
    inventory.set_held(Some(stack(&registry, 1, 3)));

    assert_eq!(inventory.transfer_held_to_slot(0), SlotAction::Merged);
    assert_eq!(summary(inventory.slot(0)), Some((1, 5)));
    assert_eq!(inventory.held().map(|s| s.count()), None);

    inventory.set_slot(0, Some(stack(&registry, 1, 2)));
    inventory.set_held(Some(stack(&registry, 2, 1)));

    assert_eq!(inventory.transfer_held_to_slot(0), SlotAction::Swapped);
    assert_eq!(summary(inventory.slot(0)), Some((2, 1)));
    assert_eq!(summary(inventory.held()), Some((1, 2)));
    for index in 1..4 {
        assert!(inventory.is_slot_clear(index));
    }
}

#[test]
fn test_split_counts() {
    let registry = registry();
    let mut inventory = small_inventory();

    inventory.set_slot(0, Some(stack(&registry, 3, 5)));
    inventory.split_into_held(0);
    assert_eq!(summary(inventory.held()), Some((3, 3)));
    assert_eq!(summary(inventory.slot(0)), Some((3, 2)));

    inventory.set_held(None);
    inventory.set_slot(1, Some(stack(&registry, 3, 1)));
    inventory.split_into_held(1);
    assert_eq!(summary(inventory.held()), Some((3, 1)));
    assert!(inventory.is_slot_clear(1));
}

#[test]
fn test_add_stack_into_full_inventory_overwrites_held() {
    let registry = registry();
    let mut inventory = small_inventory();
    for _ in 0..4 {
        inventory.add_stack(stack(&registry, 1, 1));
    }
    assert_eq!(inventory.state(), InteractionState::Idle);

    inventory.add_stack(stack(&registry, 2, 4));
    assert_eq!(summary(inventory.held()), Some((2, 4)));

    inventory.add_stack(stack(&registry, 3, 6));
    assert_eq!(summary(inventory.held()), Some((3, 6)));
    assert!(inventory.slots().all(|slot| summary(slot) == Some((1, 1))));
}

#[test]
fn test_pointer_outside_grid_changes_nothing() {
    let registry = registry();
    let mut inventory = small_inventory();
    inventory.set_slot(1, Some(stack(&registry, 2, 4)));
    inventory.set_held(Some(stack(&registry, 1, 1)));

    for position in [
        Vec2::new(-0.01, 4.0),
        Vec2::new(4.0, -3.0),
        Vec2::new(32.0, 4.0),
        Vec2::new(4.0, 32.0),
        Vec2::new(1000.0, 1000.0),
    ] {
        for button in [PointerButton::Primary, PointerButton::Secondary] {
            assert!(!inventory.handle_pointer_input(position, button));
        }
    }

    let slots: Vec<_> = inventory.slots().map(summary).collect();
    assert_eq!(slots, vec![None, Some((2, 4)), None, None]);
    assert_eq!(summary(inventory.held()), Some((1, 1)));
}

#[test]
fn test_close_on_full_inventory_loses_held() {
    let registry = registry();
    let mut inventory = small_inventory();
    for index in 0..4 {
        inventory.set_slot(index, Some(stack(&registry, 2, 1)));
    }
    inventory.set_held(Some(stack(&registry, 3, 7)));

    inventory.close();

    assert_eq!(inventory.state(), InteractionState::Idle);
    assert!(inventory.slots().all(|slot| summary(slot) == Some((2, 1))));
    let total_gems: u32 = inventory
        .slots()
        .flatten()
        .filter(|s| s.item_id() == ItemId(3))
        .map(|s| s.count())
        .sum();
    assert_eq!(total_gems, 0);
}

#[test]
fn test_click_sequence_walks_state_machine() {
    let registry = registry();
    let mut inventory = small_inventory();
    inventory.set_slot(0, Some(stack(&registry, 1, 9)));
    inventory.set_slot(3, Some(stack(&registry, 9, 1)));

    // right click splits: Idle -> Holding
    assert!(inventory.handle_pointer_input(Vec2::new(8.0, 8.0), PointerButton::Secondary));
    assert_eq!(inventory.state(), InteractionState::Holding);
    assert_eq!(summary(inventory.held()), Some((1, 5)));

    // left click on the staff: exchange, still Holding
    assert!(inventory.handle_pointer_input(Vec2::new(24.0, 24.0), PointerButton::Primary));
    assert_eq!(summary(inventory.held()), Some((9, 1)));
    assert_eq!(summary(inventory.slot(3)), Some((1, 5)));

    // deposit the staff in an empty slot: Holding -> Idle
    assert!(inventory.handle_pointer_input(Vec2::new(24.0, 8.0), PointerButton::Primary));
    assert_eq!(inventory.state(), InteractionState::Idle);
    assert_eq!(summary(inventory.slot(1)), Some((9, 1)));

    // pick up ore and merge it back onto the other half
    assert!(inventory.handle_pointer_input(Vec2::new(24.0, 24.0), PointerButton::Primary));
    assert!(inventory.handle_pointer_input(Vec2::new(0.0, 0.0), PointerButton::Primary));
    assert_eq!(inventory.state(), InteractionState::Idle);
    assert_eq!(summary(inventory.slot(0)), Some((1, 9)));
    assert!(inventory.is_slot_clear(3));
}

#[test]
fn test_empty_slot_click_with_empty_hand_is_still_an_action() {
    let mut inventory = small_inventory();
    assert!(inventory.handle_pointer_input(Vec2::new(20.0, 20.0), PointerButton::Secondary));
    assert_eq!(inventory.state(), InteractionState::Idle);
}
