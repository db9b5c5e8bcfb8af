//! Tile keys
//!
//! A tile key names one `(col, row, level)` cell. Keys compare and hash on
//! the integer triple, which matches equality of the `"col,row,level"` text
//! form produced by [`Display`](core::fmt::Display).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one grid cell on one level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct TileKey {
    pub col: i32,
    pub row: i32,
    pub level: i32,
}

impl TileKey {
    pub const fn new(col: i32, row: i32, level: i32) -> Self {
        Self { col, row, level }
    }

    /// Same level, shifted by `(dc, dr)` in offset coordinates
    pub const fn offset(self, dc: i32, dr: i32) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
            level: self.level,
        }
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.col, self.row, self.level)
    }
}

impl From<(i32, i32, i32)> for TileKey {
    fn from((col, row, level): (i32, i32, i32)) -> Self {
        Self::new(col, row, level)
    }
}
