//! Integration tests for component storage
//!
//! Tests round-trips, per-type isolation, and enumeration.

use apsu_foundation::EntityId;
use apsu_storage::{Component, EntityManager};

#[derive(Debug, Clone, PartialEq)]
struct Position {
    x: i32,
    y: i32,
}
impl Component for Position {}

#[derive(Debug, Clone, PartialEq)]
struct Label(String);
impl Component for Label {}

// =============================================================================
// Round-trips
// =============================================================================

#[test]
fn set_then_get_returns_the_value() {
    let mut manager = EntityManager::new();
    let e = manager.create();

    manager.set(e, Position { x: 3, y: 4 });

    assert_eq!(manager.get::<Position>(e), Some(&Position { x: 3, y: 4 }));
}

#[test]
fn remove_then_get_returns_absent() {
    let mut manager = EntityManager::new();
    let e = manager.create();
    manager.set(e, Position { x: 3, y: 4 });

    assert_eq!(manager.remove::<Position>(e), Some(Position { x: 3, y: 4 }));
    assert_eq!(manager.get::<Position>(e), None);
}

#[test]
fn overwrite_replaces_single_entry() {
    let mut manager = EntityManager::new();
    let e = manager.create();

    manager.set(e, Position { x: 1, y: 1 });
    let prev = manager.set(e, Position { x: 2, y: 2 });

    assert_eq!(prev, Some(Position { x: 1, y: 1 }));
    assert_eq!(manager.count_of::<Position>(), 1);
    assert_eq!(manager.get::<Position>(e), Some(&Position { x: 2, y: 2 }));
}

#[test]
fn remove_from_unknown_entity_is_absent() {
    let mut manager = EntityManager::new();
    assert_eq!(manager.remove::<Position>(EntityId::new(123)), None);
}

// =============================================================================
// Per-type Isolation
// =============================================================================

#[test]
fn types_do_not_interfere() {
    let mut manager = EntityManager::new();
    let e1 = manager.create();
    let e2 = manager.create();

    manager.set(e1, Position { x: 1, y: 1 });

    assert_eq!(manager.get::<Label>(e1), None);
    assert_eq!(manager.get::<Position>(e2), None);
}

#[test]
fn removing_one_type_leaves_the_other() {
    let mut manager = EntityManager::new();
    let e = manager.create();

    manager.set(e, Position { x: 1, y: 1 });
    manager.set(e, Label("crate".to_string()));

    manager.remove::<Position>(e);

    assert_eq!(manager.get::<Position>(e), None);
    assert_eq!(manager.get::<Label>(e), Some(&Label("crate".to_string())));
}

// =============================================================================
// Enumeration
// =============================================================================

#[test]
fn all_of_yields_exactly_the_stored_pairs() {
    let mut manager = EntityManager::new();
    let entities: Vec<_> = (0..5).map(|_| manager.create()).collect();
    for (i, &e) in entities.iter().enumerate() {
        manager.set(
            e,
            Position {
                x: i as i32,
                y: i as i32,
            },
        );
    }

    let mut pairs: Vec<(EntityId, Position)> = manager
        .all_of::<Position>()
        .map(|(id, p)| (id, p.clone()))
        .collect();
    pairs.sort_unstable_by_key(|(id, _)| *id);

    let expected: Vec<(EntityId, Position)> = entities
        .iter()
        .enumerate()
        .map(|(i, &e)| {
            (
                e,
                Position {
                    x: i as i32,
                    y: i as i32,
                },
            )
        })
        .collect();
    assert_eq!(pairs, expected);
}

#[test]
fn all_of_unstored_type_is_empty() {
    let mut manager = EntityManager::new();
    let e = manager.create();
    manager.set(e, Position { x: 0, y: 0 });

    assert_eq!(manager.all_of::<Label>().count(), 0);
}

#[test]
fn all_of_mut_mutations_are_visible_afterwards() {
    let mut manager = EntityManager::new();
    let e1 = manager.create();
    let e2 = manager.create();
    manager.set(e1, Position { x: 1, y: 0 });
    manager.set(e2, Position { x: 2, y: 0 });

    for (_, pos) in manager.all_of_mut::<Position>() {
        pos.y = pos.x * 10;
    }

    assert_eq!(manager.get::<Position>(e1), Some(&Position { x: 1, y: 10 }));
    assert_eq!(manager.get::<Position>(e2), Some(&Position { x: 2, y: 20 }));
}
