//! Grid bounds and hex-direction navigation
//!
//! The generator only needs the grid's extent and a way to step from a cell
//! to its neighbor in one of six compass directions. [`GridNav`] is that seam;
//! [`World`] implements it for odd-r offset coordinates (odd rows are shoved
//! right by half a cell).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use super::TileKey;
use crate::consts::MIN_WORLD_DIM;
use crate::error::GenError;

/// The six hex directions.
///
/// Declaration order is the breadth-first expansion order: cardinal E/W
/// before the diagonals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum HexDirection {
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl HexDirection {
    /// All directions in expansion order
    pub fn all() -> impl Iterator<Item = HexDirection> {
        HexDirection::iter()
    }

    /// `(dcol, drow)` for this direction from a cell on an even or odd row
    const fn oddr_offset(self, odd_row: bool) -> (i32, i32) {
        match (self, odd_row) {
            (HexDirection::E, _) => (1, 0),
            (HexDirection::W, _) => (-1, 0),
            (HexDirection::NE, false) => (0, -1),
            (HexDirection::NW, false) => (-1, -1),
            (HexDirection::SE, false) => (0, 1),
            (HexDirection::SW, false) => (-1, 1),
            (HexDirection::NE, true) => (1, -1),
            (HexDirection::NW, true) => (0, -1),
            (HexDirection::SE, true) => (1, 1),
            (HexDirection::SW, true) => (0, 1),
        }
    }
}

/// Grid extent plus neighbor lookup
pub trait GridNav {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// The cell one step from `key` in `dir`. May lie outside the grid.
    fn neighbor(&self, key: TileKey, dir: HexDirection) -> TileKey;

    fn in_bounds(&self, key: TileKey) -> bool {
        key.col >= 0 && key.row >= 0 && key.col < self.width() && key.row < self.height()
    }

    /// Clamp a key onto the grid, keeping its level
    fn clamp(&self, key: TileKey) -> TileKey {
        TileKey::new(
            key.col.clamp(0, self.width() - 1),
            key.row.clamp(0, self.height() - 1),
            key.level,
        )
    }
}

/// The world a dungeon is generated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct World {
    width: i32,
    height: i32,
}

impl World {
    /// Create a world, rejecting grids under the 15x15 minimum
    pub fn new(width: i32, height: i32) -> Result<Self, GenError> {
        if width < MIN_WORLD_DIM || height < MIN_WORLD_DIM {
            return Err(GenError::WorldTooSmall {
                width,
                height,
                min: MIN_WORLD_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Midpoint cell used to center the first room
    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }
}

impl GridNav for World {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn neighbor(&self, key: TileKey, dir: HexDirection) -> TileKey {
        let odd_row = key.row.rem_euclid(2) == 1;
        let (dc, dr) = dir.oddr_offset(odd_row);
        key.offset(dc, dr)
    }
}
