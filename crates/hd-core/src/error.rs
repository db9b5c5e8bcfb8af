//! Generation errors
//!
//! Only conditions the generator cannot recover from are errors. Degraded
//! outcomes (a room that never found a spot, a corridor search that never
//! reached its goal) produce a smaller result instead.

use thiserror::Error;

use crate::dungeon::TileKey;

/// Errors returned by the dungeon generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("world {width}x{height} is smaller than the {min}x{min} minimum")]
    WorldTooSmall { width: i32, height: i32, min: i32 },

    #[error("invalid build parameters: {reason}")]
    InvalidParams { reason: String },

    #[error(
        "first room ({room_w}x{room_h}) does not fit centered in a {width}x{height} world with margin {margin}"
    )]
    FirstRoomOutOfBounds {
        width: i32,
        height: i32,
        room_w: i32,
        room_h: i32,
        margin: i32,
    },

    #[error("no door at {key}")]
    UnknownDoor { key: TileKey },
}

impl GenError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GenError::InvalidParams {
            reason: reason.into(),
        }
    }
}
