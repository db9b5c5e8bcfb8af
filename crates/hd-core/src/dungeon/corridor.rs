//! Corridor routing
//!
//! Consecutive rooms are joined in placement order:
//! 1. Each room gets a door on the wall facing the other room's center
//! 2. The tile just outside each door is carved so the corridor has a toehold
//! 3. A breadth-first search links the two toeholds across the whole grid,
//!    where only leaving the grid is forbidden (corridors cut through walls)
//! 4. The path found is carved one tile wide

use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use log::{debug, warn};

use super::{DungeonDraft, GridNav, HexDirection, Room, TileKey, WallSide};

/// Outcome counts for one routing pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoutingReport {
    pub routed: u32,
    pub failed: u32,
}

/// Pick the wall tile of `room` that faces `target`.
///
/// Whichever displacement axis dominates picks the wall pair; the position
/// along the wall follows the target, clamped off the corners.
pub fn facing_door(room: &Room, target: (i32, i32), level: i32) -> (TileKey, WallSide) {
    let r = &room.rect;
    let (cx, cy) = r.center();
    let (tx, ty) = target;
    let (dx, dy) = (tx - cx, ty - cy);

    if dx.abs() > dy.abs() {
        let row = ty.clamp(r.top + 1, r.bottom - 1);
        if dx > 0 {
            (TileKey::new(r.right, row, level), WallSide::Right)
        } else {
            (TileKey::new(r.left, row, level), WallSide::Left)
        }
    } else {
        let col = tx.clamp(r.left + 1, r.right - 1);
        if dy > 0 {
            (TileKey::new(col, r.bottom, level), WallSide::Bottom)
        } else {
            (TileKey::new(col, r.top, level), WallSide::Top)
        }
    }
}

/// The tile one step outside a door
pub fn step_out(door: TileKey, side: WallSide) -> TileKey {
    let (dc, dr) = side.outward();
    door.offset(dc, dr)
}

/// Breadth-first search from `start` to `goal`.
///
/// Only out-of-bounds cells are impassable. Neighbors expand in
/// [`HexDirection`] order. Returns the path excluding `start` and including
/// `goal`, or None if `start == goal` or the goal can't be reached.
pub fn find_path<G: GridNav + ?Sized>(
    grid: &G,
    start: TileKey,
    goal: TileKey,
) -> Option<Vec<TileKey>> {
    if start == goal || !grid.in_bounds(start) || !grid.in_bounds(goal) {
        return None;
    }

    let mut queue = VecDeque::new();
    let mut visited: HashSet<TileKey> = HashSet::new();
    let mut came_from: HashMap<TileKey, TileKey> = HashMap::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(reconstruct_path(&came_from, start, goal));
        }

        for dir in HexDirection::all() {
            let next = grid.neighbor(current, dir);
            if !grid.in_bounds(next) || !visited.insert(next) {
                continue;
            }
            came_from.insert(next, current);
            queue.push_back(next);
        }
    }

    None
}

/// Follow parent links back from `goal`; the result runs start-exclusive to goal
fn reconstruct_path(
    came_from: &HashMap<TileKey, TileKey>,
    start: TileKey,
    goal: TileKey,
) -> Vec<TileKey> {
    let mut path = Vec::new();
    let mut current = goal;

    while current != start {
        path.push(current);
        match came_from.get(&current) {
            Some(&prev) => current = prev,
            None => break,
        }
    }

    path.reverse();
    path
}

/// Join room `a` to room `b`. Returns whether a path was carved.
fn join_rooms<G: GridNav + ?Sized>(grid: &G, draft: &mut DungeonDraft, a: usize, b: usize) -> bool {
    let level = draft.level();
    let (door_a, side_a) = facing_door(&draft.rooms()[a], draft.rooms()[b].center(), level);
    let (door_b, side_b) = facing_door(&draft.rooms()[b], draft.rooms()[a].center(), level);

    draft.register_door(a, door_a);
    draft.register_door(b, door_b);

    let start = step_out(door_a, side_a);
    let goal = step_out(door_b, side_b);
    for toehold in [start, goal] {
        if grid.in_bounds(toehold) {
            draft.carve(toehold);
        }
    }

    match find_path(grid, start, goal) {
        Some(path) => {
            debug!(
                "corridor {a}->{b}: doors {door_a} / {door_b}, {} tiles",
                path.len()
            );
            for key in path {
                draft.carve(key);
            }
            true
        }
        None => {
            warn!("corridor {a}->{b}: no path from {start} to {goal}, rooms left unjoined");
            false
        }
    }
}

/// Connect every room to the one placed after it
pub fn route_corridors<G: GridNav + ?Sized>(grid: &G, draft: &mut DungeonDraft) -> RoutingReport {
    let mut report = RoutingReport::default();
    for b in 1..draft.rooms().len() {
        if join_rooms(grid, draft, b - 1, b) {
            report.routed += 1;
        } else {
            report.failed += 1;
        }
    }
    report
}
