//! Wall segments for rendering
//!
//! Each room's wall ring is broken into unit edges between neighboring
//! perimeter tiles. Edges touching one of the room's door tiles are dropped,
//! which leaves a gap at every doorway. Collision never consults these.

use serde::{Deserialize, Serialize};

use super::{Room, TileKey};

/// An undirected edge between two adjacent perimeter tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallSegment {
    pub a: TileKey,
    pub b: TileKey,
}

impl WallSegment {
    pub fn new(a: TileKey, b: TileKey) -> Self {
        Self { a, b }
    }

    pub fn touches(&self, key: TileKey) -> bool {
        self.a == key || self.b == key
    }
}

/// Wall segments for one room, walking top, bottom, left, then right edge
pub fn room_walls(room: &Room, level: i32) -> Vec<WallSegment> {
    let r = &room.rect;
    let key = |col, row| TileKey::new(col, row, level);
    let mut edges = Vec::with_capacity((2 * (r.width() + r.height())) as usize);

    for row in [r.top, r.bottom] {
        for col in r.left..r.right {
            edges.push(WallSegment::new(key(col, row), key(col + 1, row)));
        }
    }
    for col in [r.left, r.right] {
        for row in r.top..r.bottom {
            edges.push(WallSegment::new(key(col, row), key(col, row + 1)));
        }
    }

    edges.retain(|seg| !room.door_keys.iter().any(|&d| seg.touches(d)));
    edges
}

/// Wall segments for every room, in room order
pub fn derive_walls(rooms: &[Room], level: i32) -> Vec<WallSegment> {
    rooms.iter().flat_map(|room| room_walls(room, level)).collect()
}
