//! Rooms and their walls
//!
//! A room is a rectangle plus the door tiles that punctuate its wall, in the
//! order corridors reached them.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::{RoomRect, TileKey};

/// Which wall of a room a perimeter tile belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl WallSide {
    /// One step away from the room interior, in offset coordinates
    pub const fn outward(self) -> (i32, i32) {
        match self {
            WallSide::Left => (-1, 0),
            WallSide::Right => (1, 0),
            WallSide::Top => (0, -1),
            WallSide::Bottom => (0, 1),
        }
    }
}

/// A placed room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub rect: RoomRect,
    pub door_keys: Vec<TileKey>,
}

impl Room {
    pub fn new(rect: RoomRect) -> Self {
        Self {
            rect,
            door_keys: Vec::new(),
        }
    }

    pub fn center(&self) -> (i32, i32) {
        self.rect.center()
    }

    pub fn has_door(&self, key: TileKey) -> bool {
        self.door_keys.contains(&key)
    }

    /// Record a door on this room. Returns false if it was already recorded.
    pub fn add_door(&mut self, key: TileKey) -> bool {
        if self.has_door(key) {
            return false;
        }
        self.door_keys.push(key);
        true
    }

    /// The wall a non-corner perimeter cell sits on.
    ///
    /// Corners and cells off the perimeter have no single wall.
    pub fn wall_side(&self, col: i32, row: i32) -> Option<WallSide> {
        let r = &self.rect;
        if !r.is_perimeter(col, row) {
            return None;
        }
        let on_vertical = col == r.left || col == r.right;
        let on_horizontal = row == r.top || row == r.bottom;
        match (on_vertical, on_horizontal) {
            (true, true) => None,
            (true, false) if col == r.left => Some(WallSide::Left),
            (true, false) => Some(WallSide::Right),
            (false, true) if row == r.top => Some(WallSide::Top),
            (false, true) => Some(WallSide::Bottom),
            (false, false) => None,
        }
    }

    /// Door tiles on one wall
    pub fn doors_on(&self, side: WallSide) -> impl Iterator<Item = TileKey> + '_ {
        self.door_keys
            .iter()
            .copied()
            .filter(move |k| self.wall_side(k.col, k.row) == Some(side))
    }
}
