//! Difficulty-driven sizing
//!
//! Maps the level differential between player and monsters, plus a difficulty
//! setting, to how many rooms a dungeon should have and how large a grid is
//! likely to hold them.

use serde::{Deserialize, Serialize};

use super::BuildParams;
use crate::consts::{MIN_ROOM_COUNT, MIN_WORLD_DIM};

/// Advisory grid size for a requested room count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldEstimate {
    pub room_count: u32,
    pub width: i32,
    pub height: i32,
}

/// Base room count for a level differential
fn base_room_count(delta: i64) -> i64 {
    match delta {
        d if d <= -4 => 3,
        -3 | -2 => 4,
        _ => 5,
    }
}

/// Number of rooms for a player facing monsters of a given level.
///
/// A weaker player gets fewer rooms; a stronger one gets a bonus that grows
/// with the square root of the differential. Never below 3.
pub fn compute_room_count(player_level: i32, monster_level: i32, difficulty_level: i32) -> u32 {
    let delta = i64::from(player_level) - i64::from(monster_level);
    let mut count = base_room_count(delta) + i64::from(difficulty_level) * 2;
    if delta >= 1 {
        count += (1.35 * (delta as f64).sqrt()).ceil() as i64;
    }
    count.clamp(i64::from(MIN_ROOM_COUNT), i64::from(u32::MAX)) as u32
}

/// Estimate a grid large enough to lay rooms out on a square lattice.
///
/// Only the maximum room dimensions matter: each lattice cell reserves
/// `room_max + corridor_pad` tiles. The generator does not enforce this size;
/// a smaller grid makes later rooms fail to place.
#[allow(clippy::too_many_arguments)]
pub fn estimate_world_size(
    player_level: i32,
    monster_level: i32,
    difficulty_level: i32,
    _room_min_w: i32,
    room_max_w: i32,
    _room_min_h: i32,
    room_max_h: i32,
    margin: i32,
    corridor_pad: i32,
) -> WorldEstimate {
    let room_count = compute_room_count(player_level, monster_level, difficulty_level);
    lattice_estimate(room_count, room_max_w, room_max_h, margin, corridor_pad)
}

/// [`estimate_world_size`] driven by a parameter set, honoring its room-count override
pub fn estimate_world_size_for(params: &BuildParams, corridor_pad: i32) -> WorldEstimate {
    let room_count = params.target_room_count();
    lattice_estimate(
        room_count,
        params.room_max_w,
        params.room_max_h,
        params.margin,
        corridor_pad,
    )
}

fn lattice_estimate(
    room_count: u32,
    room_max_w: i32,
    room_max_h: i32,
    margin: i32,
    corridor_pad: i32,
) -> WorldEstimate {
    let side = (f64::from(room_count)).sqrt().ceil() as i64;
    let cell_w = i64::from(room_max_w) + i64::from(corridor_pad);
    let cell_h = i64::from(room_max_h) + i64::from(corridor_pad);
    let width = side * cell_w + 2 * i64::from(margin);
    let height = side * cell_h + 2 * i64::from(margin);
    let fit = |v: i64| v.clamp(i64::from(MIN_WORLD_DIM), i64::from(i32::MAX)) as i32;
    WorldEstimate {
        room_count,
        width: fit(width),
        height: fit(height),
    }
}
