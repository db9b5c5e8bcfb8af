//! ASCII map dump
//!
//! Each tile takes two columns and odd rows are shifted right by one, so the
//! text lines up the way odd-r offset rows do on a hex grid.

use hd_core::dungeon::{Dungeon, GridNav, TileKey, WallSide};
use hd_core::{
    S_CLOSED_DOOR, S_CORR, S_HWALL, S_OPEN_DOOR, S_ROOM, S_SPAWN, S_STONE, S_VWALL,
};

/// Symbol for one tile
fn glyph(dungeon: &Dungeon, key: TileKey) -> char {
    if key == dungeon.spawn() {
        return S_SPAWN;
    }
    if let Some(door) = dungeon.door_at(key) {
        return if door.open { S_OPEN_DOOR } else { S_CLOSED_DOOR };
    }

    let room = dungeon.room_at(key).map(|idx| &dungeon.rooms()[idx]);
    if dungeon.is_floor(key) && !dungeon.is_blocked(key) {
        return match room {
            Some(r) if r.rect.is_interior(key.col, key.row) => S_ROOM,
            _ => S_CORR,
        };
    }
    if dungeon.is_blocked(key) {
        return match room.and_then(|r| r.wall_side(key.col, key.row)) {
            Some(WallSide::Left | WallSide::Right) => S_VWALL,
            _ => S_HWALL,
        };
    }
    S_STONE
}

/// Render the whole grid, one text line per row
pub fn ascii_map(dungeon: &Dungeon) -> String {
    let world = dungeon.world();
    let level = dungeon.meta().level;
    let mut out = String::with_capacity(((world.width() * 2 + 2) * world.height()) as usize);

    for row in 0..world.height() {
        let mut line = String::new();
        if row % 2 == 1 {
            line.push(' ');
        }
        for col in 0..world.width() {
            line.push(glyph(dungeon, TileKey::new(col, row, level)));
            line.push(' ');
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
