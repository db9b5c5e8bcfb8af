//! Dungeon generation
//!
//! Rooms are placed on an odd-r hex grid, joined in placement order by
//! corridors, and frozen into an immutable [`Dungeon`].

mod builder;
mod corridor;
mod draft;
mod grid;
mod placement;
mod reach;
mod rect;
mod result;
mod room;
mod sizing;
mod tile;
mod walls;

pub use builder::{BuildParams, DungeonBuilder};
pub use corridor::{RoutingReport, facing_door, find_path, route_corridors, step_out};
pub use draft::DungeonDraft;
pub use grid::{GridNav, HexDirection, World};
pub use placement::place_rooms;
pub use reach::{reachable_from, room_components};
pub use rect::RoomRect;
pub use result::{Door, Dungeon, DungeonMeta};
pub use room::{Room, WallSide};
pub use sizing::{WorldEstimate, compute_room_count, estimate_world_size, estimate_world_size_for};
pub use tile::TileKey;
pub use walls::{WallSegment, derive_walls, room_walls};
