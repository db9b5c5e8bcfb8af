//! Reachability over a finished dungeon
//!
//! Movement range respects doors as they are. The connectivity report asks
//! the other question: which rooms could reach each other once every door is
//! opened.

use std::collections::{BTreeMap, VecDeque};

use hashbrown::HashMap;

use super::{Dungeon, GridNav, HexDirection, TileKey};

/// Tiles reachable from `start` within `max_steps` hex moves, with their
/// step counts.
///
/// Only passable tiles are entered, so closed doors stop the search. Empty
/// when `start` itself is not passable.
pub fn reachable_from(dungeon: &Dungeon, start: TileKey, max_steps: u32) -> BTreeMap<TileKey, u32> {
    let mut dist = BTreeMap::new();
    if !dungeon.is_passable(start) {
        return dist;
    }

    let grid = dungeon.world();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let steps = dist[&current];
        if steps >= max_steps {
            continue;
        }
        for dir in HexDirection::all() {
            let next = grid.neighbor(current, dir);
            if dist.contains_key(&next) || !dungeon.is_passable(next) {
                continue;
            }
            dist.insert(next, steps + 1);
            queue.push_back(next);
        }
    }
    dist
}

/// Walkable with every door open
fn walkable_open(dungeon: &Dungeon, key: TileKey) -> bool {
    dungeon.world().in_bounds(key)
        && (dungeon.door_at(key).is_some()
            || (dungeon.is_floor(key) && !dungeon.is_blocked(key)))
}

/// Groups of room indices that can reach each other with all doors open.
///
/// Groups are ordered by their lowest room index; indices within a group
/// ascend.
pub fn room_components(dungeon: &Dungeon) -> Vec<Vec<usize>> {
    let level = dungeon.meta().level;
    let mut label: HashMap<TileKey, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut group_of_label: HashMap<usize, usize> = HashMap::new();

    for (idx, room) in dungeon.rooms().iter().enumerate() {
        let Some(seed) = room
            .rect
            .interior(level)
            .find(|&k| walkable_open(dungeon, k))
        else {
            groups.push(vec![idx]);
            continue;
        };

        let component = match label.get(&seed) {
            Some(&c) => c,
            None => {
                flood(dungeon, seed, idx, &mut label);
                idx
            }
        };

        match group_of_label.get(&component) {
            Some(&g) => groups[g].push(idx),
            None => {
                group_of_label.insert(component, groups.len());
                groups.push(vec![idx]);
            }
        }
    }
    groups
}

fn flood(dungeon: &Dungeon, seed: TileKey, component: usize, label: &mut HashMap<TileKey, usize>) {
    let grid = dungeon.world();
    let mut queue = VecDeque::from([seed]);
    label.insert(seed, component);

    while let Some(current) = queue.pop_front() {
        for dir in HexDirection::all() {
            let next = grid.neighbor(current, dir);
            if label.contains_key(&next) || !walkable_open(dungeon, next) {
                continue;
            }
            label.insert(next, component);
            queue.push_back(next);
        }
    }
}

impl Dungeon {
    /// True when every room can reach every other with all doors open
    pub fn is_fully_connected(&self) -> bool {
        room_components(self).len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{DungeonDraft, DungeonMeta, RoomRect, World};

    /// Two rooms joined by a straight corridor through their facing doors
    fn pair() -> (Dungeon, TileKey, TileKey) {
        let world = World::new(40, 20).unwrap();
        let mut draft = DungeonDraft::new(world, DungeonMeta::default());
        draft.stamp_room(RoomRect::new(2, 4, 10, 10));
        draft.stamp_room(RoomRect::new(20, 4, 28, 10));
        let (a, b) = (TileKey::new(10, 7, 0), TileKey::new(20, 7, 0));
        draft.add_door(0, a).unwrap();
        draft.add_door(1, b).unwrap();
        for col in 11..20 {
            draft.carve(TileKey::new(col, 7, 0));
        }
        (draft.freeze(), a, b)
    }

    #[test]
    fn test_closed_door_stops_movement() {
        let (dungeon, door, _) = pair();
        let reach = reachable_from(&dungeon, TileKey::new(6, 7, 0), 50);
        assert!(!reach.contains_key(&door));
        assert!(!reach.contains_key(&TileKey::new(11, 7, 0)));
        // 7x5 interior
        assert_eq!(reach.len(), 35);
    }

    #[test]
    fn test_open_doors_let_movement_through() {
        let (dungeon, a, b) = pair();
        let mut draft = dungeon.to_draft();
        draft.set_door_open(a, true).unwrap();
        draft.set_door_open(b, true).unwrap();
        let opened = draft.freeze();

        let reach = reachable_from(&opened, TileKey::new(9, 7, 0), 50);
        assert_eq!(reach.get(&a), Some(&1));
        assert_eq!(reach.get(&b), Some(&11));
        assert!(reach.contains_key(&TileKey::new(24, 7, 0)));
    }

    #[test]
    fn test_max_steps_limits_range() {
        let (dungeon, _, _) = pair();
        let start = TileKey::new(6, 7, 0);
        let reach = reachable_from(&dungeon, start, 1);
        assert_eq!(reach.len(), 7);
        assert!(reach.values().all(|&d| d <= 1));
        assert_eq!(reachable_from(&dungeon, start, 0).len(), 1);
    }

    #[test]
    fn test_blocked_start_is_empty() {
        let (dungeon, door, _) = pair();
        assert!(reachable_from(&dungeon, door, 5).is_empty());
    }

    #[test]
    fn test_components() {
        let (dungeon, _, _) = pair();
        assert_eq!(room_components(&dungeon), vec![vec![0, 1]]);
        assert!(dungeon.is_fully_connected());

        let world = World::new(40, 20).unwrap();
        let mut draft = DungeonDraft::new(world, DungeonMeta::default());
        draft.stamp_room(RoomRect::new(2, 4, 10, 10));
        draft.stamp_room(RoomRect::new(20, 4, 28, 10));
        let split = draft.freeze();
        assert_eq!(room_components(&split), vec![vec![0], vec![1]]);
        assert!(!split.is_fully_connected());
    }
}
