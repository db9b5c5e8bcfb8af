//! End-to-end dungeon generation tests
//!
//! Room counts, single-room builds, degraded placement, determinism, and door
//! and reachability behavior of finished dungeons.

use hd_core::dungeon::{
    BuildParams, Dungeon, DungeonBuilder, GridNav, TileKey, WallSide, World, compute_room_count,
    estimate_world_size_for, reachable_from,
};
use hd_core::{DEFAULT_CORRIDOR_PAD, FnRng, GameRng, GenError, RandomSource};

// ============================================================================
// Helpers
// ============================================================================

fn estimated_world(params: &BuildParams) -> World {
    let est = estimate_world_size_for(params, DEFAULT_CORRIDOR_PAD);
    World::new(est.width, est.height).unwrap()
}

fn build(seed: u64, params: &BuildParams) -> Dungeon {
    DungeonBuilder::seeded(estimated_world(params), seed)
        .build_dungeon(params)
        .unwrap()
}

// ============================================================================
// Room counts
// ============================================================================

#[test]
fn test_even_levels_give_five_rooms() {
    assert_eq!(compute_room_count(1, 1, 0), 5);
}

#[test]
fn test_stronger_player_with_difficulty() {
    assert_eq!(compute_room_count(5, 1, 1), 10);
}

// ============================================================================
// Single room and degraded builds
// ============================================================================

#[test]
fn test_build_default_single_room() {
    let world = World::new(15, 15).unwrap();
    let dungeon = DungeonBuilder::seeded(world, 7).build_default().unwrap();

    assert_eq!(dungeon.rooms().len(), 1);
    let room = &dungeon.rooms()[0];
    assert_eq!(room.rect.width(), 9);
    assert_eq!(room.rect.height(), 7);

    assert_eq!(room.door_keys.len(), 1);
    let door = room.door_keys[0];
    assert_eq!(room.wall_side(door.col, door.row), Some(WallSide::Bottom));
    assert!(dungeon.is_blocked(door));

    let interior: Vec<TileKey> = room.rect.interior(0).collect();
    assert_eq!(interior.len(), 7 * 5);
    assert!(interior.iter().all(|&k| dungeon.is_floor(k)));
    assert_eq!(dungeon.floor().len(), interior.len());
}

#[test]
fn test_small_grid_keeps_first_room_only() {
    let world = World::new(15, 15).unwrap();
    let params = BuildParams {
        room_count: Some(2),
        ..BuildParams::default()
    };
    for seed in 0..10 {
        let dungeon = DungeonBuilder::seeded(world, seed)
            .build_dungeon(&params)
            .unwrap();
        assert_eq!(dungeon.rooms().len(), 1, "seed {seed}");
        assert_eq!(dungeon.meta().requested_rooms, 2);
        assert_eq!(dungeon.meta().placed_rooms, 1);
        assert_eq!(dungeon.meta().corridors_routed, 0);
        assert!(dungeon.doors().is_empty());
    }
}

#[test]
fn test_first_room_too_big_is_fatal() {
    let world = World::new(15, 15).unwrap();
    let params = BuildParams {
        room_min_h: 13,
        room_max_h: 13,
        ..BuildParams::default()
    };
    let err = DungeonBuilder::seeded(world, 1)
        .build_dungeon(&params)
        .unwrap_err();
    assert!(matches!(err, GenError::FirstRoomOutOfBounds { .. }));
}

#[test]
fn test_world_too_small() {
    assert!(matches!(
        World::new(12, 40),
        Err(GenError::WorldTooSmall { .. })
    ));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_seed_same_dungeon() {
    let params = BuildParams {
        player_level: 4,
        monster_level: 2,
        ..BuildParams::default()
    };
    let a = build(1234, &params);
    let b = build(1234, &params);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_closure_source_matches_seeded_source() {
    let params = BuildParams::default();
    let world = estimated_world(&params);

    let mut stream = GameRng::new(99);
    let scripted = DungeonBuilder::new(world, FnRng(move || stream.next_f64()))
        .build_dungeon(&params)
        .unwrap();
    let seeded = DungeonBuilder::seeded(world, 99)
        .build_dungeon(&params)
        .unwrap();
    assert_eq!(scripted, seeded);
}

// ============================================================================
// Doors, walls and reachability
// ============================================================================

#[test]
fn test_doors_are_registered_closed_and_on_walls() {
    for seed in 0..20 {
        let dungeon = build(seed, &BuildParams::default());
        for (idx, room) in dungeon.rooms().iter().enumerate() {
            for &door in &room.door_keys {
                assert!(room.wall_side(door.col, door.row).is_some());
                assert_eq!(dungeon.door_at(door).map(|d| d.open), Some(false));
                assert!(dungeon.is_blocked(door), "seed {seed} room {idx} door {door}");
            }
        }
        assert!(dungeon
            .walls()
            .iter()
            .all(|seg| dungeon.door_at(seg.a).is_none() && dungeon.door_at(seg.b).is_none()));
    }
}

#[test]
fn test_routed_dungeons_are_connected() {
    for seed in 0..20 {
        let dungeon = build(seed, &BuildParams::default());
        let meta = dungeon.meta();
        if meta.corridors_failed == 0 {
            assert!(dungeon.is_fully_connected(), "seed {seed}");
        }
    }
}

#[test]
fn test_spawn_inside_first_room() {
    for seed in 0..10 {
        let dungeon = build(seed, &BuildParams::default());
        let spawn = dungeon.spawn();
        assert!(dungeon.rooms()[0].rect.is_interior(spawn.col, spawn.row));
        assert!(dungeon.is_passable(spawn));
    }
}

#[test]
fn test_opening_doors_extends_reach() {
    let dungeon = build(5, &BuildParams::default());
    let spawn = dungeon.spawn();
    let closed = reachable_from(&dungeon, spawn, u32::MAX);
    assert!(closed.keys().all(|&k| dungeon.door_at(k).is_none()));

    let mut draft = dungeon.to_draft();
    let doors: Vec<TileKey> = dungeon.doors().keys().copied().collect();
    for &door in &doors {
        draft.set_door_open(door, true).unwrap();
    }
    let opened = draft.freeze();
    let open_reach = reachable_from(&opened, spawn, u32::MAX);

    assert!(open_reach.len() >= closed.len());
    if let Some(first_door) = dungeon.rooms()[0].door_keys.first() {
        assert!(open_reach.contains_key(first_door));
    }
    // the source dungeon is untouched
    assert!(doors.iter().all(|&d| dungeon.is_blocked(d)));
}

#[test]
fn test_tiles_stay_in_bounds() {
    let dungeon = build(77, &BuildParams::default());
    let world = dungeon.world();
    assert!(dungeon.floor().iter().all(|&k| world.in_bounds(k)));
    assert!(dungeon.blocked().iter().all(|&k| world.in_bounds(k)));
}
