//! Generation constants and parameter defaults.

/// Smallest grid dimension the generator accepts
pub const MIN_WORLD_DIM: i32 = 15;

/// Room count floor, regardless of level differential
pub const MIN_ROOM_COUNT: u32 = 3;

/// Default room size ranges (inclusive of the perimeter)
pub const DEFAULT_ROOM_MIN_W: i32 = 7;
pub const DEFAULT_ROOM_MAX_W: i32 = 11;
pub const DEFAULT_ROOM_MIN_H: i32 = 5;
pub const DEFAULT_ROOM_MAX_H: i32 = 9;

/// Minimum gap between room rectangles
pub const DEFAULT_ROOM_PAD: i32 = 2;

/// Placement retries per room
pub const DEFAULT_MAX_ROOM_ATTEMPTS: u32 = 80;

/// Corridors are always one tile wide
pub const CORRIDOR_WIDTH: u32 = 1;

/// Distance kept between rooms and the grid edge
pub const DEFAULT_MARGIN: i32 = 2;

/// Extra per-room footprint reserved for corridors when estimating grid size
pub const DEFAULT_CORRIDOR_PAD: i32 = 4;

/// Smallest rectangle that still has an interior: right-left >= 4, bottom-top >= 2
pub const MIN_ROOM_W: i32 = 5;
pub const MIN_ROOM_H: i32 = 3;

/// Hops walked from the previous room's center to propose the next one
pub const MIN_ROOM_STEP: i32 = 6;
pub const MAX_ROOM_STEP: i32 = 14;

/// Spawn offset from room 0's top-left corner
pub const SPAWN_INSET: i32 = 2;

/// Fixed size of the single-room dungeon
pub const SINGLE_ROOM_W: i32 = 9;
pub const SINGLE_ROOM_H: i32 = 7;

/// Map symbols used by text dumps
pub const S_STONE: char = ' ';
pub const S_VWALL: char = '|';
pub const S_HWALL: char = '-';
pub const S_ROOM: char = '.';
pub const S_CORR: char = '#';
pub const S_CLOSED_DOOR: char = '+';
pub const S_OPEN_DOOR: char = '\'';
pub const S_SPAWN: char = '@';
