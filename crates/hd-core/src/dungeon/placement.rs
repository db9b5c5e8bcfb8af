//! Room placement
//!
//! The first room sits at the grid's midpoint. Each later room is proposed by
//! walking a random number of hops in a random hex direction from the
//! previous room's center, and kept only if it respects the edge margin and
//! the padding to every room already placed.

use log::{debug, warn};

use super::{BuildParams, DungeonDraft, GridNav, HexDirection, RoomRect, TileKey};
use crate::consts::{MAX_ROOM_STEP, MIN_ROOM_H, MIN_ROOM_STEP, MIN_ROOM_W};
use crate::error::GenError;
use crate::rng::RandomSource;

/// Sample a room size, raised to the smallest rectangle with an interior
fn sample_size<R: RandomSource>(rng: &mut R, params: &BuildParams) -> (i32, i32) {
    let w = rng
        .range_inclusive(params.room_min_w, params.room_max_w)
        .max(MIN_ROOM_W);
    let h = rng
        .range_inclusive(params.room_min_h, params.room_max_h)
        .max(MIN_ROOM_H);
    (w, h)
}

/// Walk `steps` single hops from `from` toward `dir`
fn walk<G: GridNav + ?Sized>(grid: &G, from: TileKey, dir: HexDirection, steps: i32) -> TileKey {
    (0..steps).fold(from, |at, _| grid.neighbor(at, dir))
}

fn is_clear(candidate: &RoomRect, placed: &DungeonDraft, pad: i32) -> bool {
    placed
        .rooms()
        .iter()
        .all(|room| !candidate.overlaps_padded(&room.rect, pad))
}

/// Place the first room at the grid's midpoint.
///
/// Failure here means the grid was sized too small for the room knobs, which
/// the generator can't work around.
fn place_first<G: GridNav + ?Sized, R: RandomSource>(
    grid: &G,
    rng: &mut R,
    params: &BuildParams,
    draft: &mut DungeonDraft,
) -> Result<(), GenError> {
    let (w, h) = sample_size(rng, params);
    let rect = RoomRect::centered(grid.width() / 2, grid.height() / 2, w, h);
    if !rect.fits_within(grid, params.margin) {
        return Err(GenError::FirstRoomOutOfBounds {
            width: grid.width(),
            height: grid.height(),
            room_w: w,
            room_h: h,
            margin: params.margin,
        });
    }
    draft.stamp_room(rect);
    debug!("room 0 placed at {rect:?}");
    Ok(())
}

/// Try to place one more room next to the last one
fn place_next<G: GridNav + ?Sized, R: RandomSource>(
    grid: &G,
    rng: &mut R,
    params: &BuildParams,
    draft: &mut DungeonDraft,
) -> Option<RoomRect> {
    let (cx, cy) = draft.rooms().last()?.center();
    let origin = TileKey::new(cx, cy, draft.level());
    let directions: Vec<HexDirection> = HexDirection::all().collect();

    for attempt in 0..params.max_room_attempts {
        let (w, h) = sample_size(rng, params);
        let dir = directions[rng.index(directions.len())];
        let steps = rng.range_inclusive(MIN_ROOM_STEP, MAX_ROOM_STEP);
        let center = walk(grid, origin, dir, steps);
        let rect = RoomRect::centered(center.col, center.row, w, h);

        if !rect.fits_within(grid, params.margin) || !is_clear(&rect, draft, params.room_pad) {
            continue;
        }

        draft.stamp_room(rect);
        debug!(
            "room {} placed at {rect:?} after {} attempt(s) ({steps} hops {dir})",
            draft.rooms().len() - 1,
            attempt + 1
        );
        return Some(rect);
    }
    None
}

/// Place up to `target` rooms into `draft`, returning how many were placed.
///
/// Only the first room is mandatory. When a later room exhausts its attempt
/// budget, placement stops and the rooms placed so far are kept.
pub fn place_rooms<G: GridNav + ?Sized, R: RandomSource>(
    grid: &G,
    rng: &mut R,
    params: &BuildParams,
    target: u32,
    draft: &mut DungeonDraft,
) -> Result<u32, GenError> {
    if target == 0 {
        return Ok(0);
    }
    place_first(grid, rng, params, draft)?;

    for i in 1..target {
        if place_next(grid, rng, params, draft).is_none() {
            warn!(
                "room {i} not placed after {} attempts; keeping {} of {target} rooms",
                params.max_room_attempts,
                draft.rooms().len()
            );
            break;
        }
    }
    Ok(draft.rooms().len() as u32)
}
