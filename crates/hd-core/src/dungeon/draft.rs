//! Mutable working state
//!
//! A [`DungeonDraft`] owns every collection while a dungeon is being built.
//! It is also how callers derive a variant of a finished dungeon: copy it out
//! with [`Dungeon::to_draft`], edit, and [`freeze`](DungeonDraft::freeze) a new
//! result. Finished dungeons themselves never change.

use hashbrown::{HashMap, HashSet};

use super::walls::derive_walls;
use super::{Door, Dungeon, DungeonMeta, GridNav, Room, RoomRect, TileKey, World};
use crate::consts::SPAWN_INSET;
use crate::error::GenError;

/// Exclusively owned, mutable dungeon state
#[derive(Debug, Clone)]
pub struct DungeonDraft {
    pub(crate) world: World,
    pub(crate) meta: DungeonMeta,
    pub(crate) rooms: Vec<Room>,
    pub(crate) floor: HashSet<TileKey>,
    pub(crate) blocked: HashSet<TileKey>,
    pub(crate) doors: HashMap<TileKey, Door>,
}

impl DungeonDraft {
    /// An empty draft on `world`
    pub fn new(world: World, meta: DungeonMeta) -> Self {
        Self {
            world,
            meta,
            rooms: Vec::new(),
            floor: HashSet::new(),
            blocked: HashSet::new(),
            doors: HashMap::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn level(&self) -> i32 {
        self.meta.level
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn floor(&self) -> &HashSet<TileKey> {
        &self.floor
    }

    pub fn blocked(&self) -> &HashSet<TileKey> {
        &self.blocked
    }

    pub fn doors(&self) -> &HashMap<TileKey, Door> {
        &self.doors
    }

    /// Add a room: interior becomes floor, the wall ring becomes blocked.
    ///
    /// Returns the new room's index.
    pub fn stamp_room(&mut self, rect: RoomRect) -> usize {
        let level = self.level();
        self.floor.extend(rect.interior(level));
        self.blocked.extend(rect.perimeter(level));
        self.rooms.push(Room::new(rect));
        self.rooms.len() - 1
    }

    /// Make a tile walkable corridor.
    ///
    /// Door tiles are left alone so their blocked state keeps following the
    /// door. Returns whether the tile was carved.
    pub fn carve(&mut self, key: TileKey) -> bool {
        if self.doors.contains_key(&key) {
            return false;
        }
        self.floor.insert(key);
        self.blocked.remove(&key);
        true
    }

    /// Register a closed door for a room at `key`, which the router has
    /// already picked on that room's wall.
    pub(crate) fn register_door(&mut self, room_idx: usize, key: TileKey) {
        let door = *self.doors.entry(key).or_insert(Door { open: false });
        if door.open {
            self.blocked.remove(&key);
        } else {
            self.blocked.insert(key);
        }
        if let Some(room) = self.rooms.get_mut(room_idx) {
            room.add_door(key);
        }
    }

    /// Add a closed door on a room's wall.
    ///
    /// The tile must be a non-corner perimeter cell of that room.
    pub fn add_door(&mut self, room_idx: usize, key: TileKey) -> Result<(), GenError> {
        let room = self.rooms.get(room_idx).ok_or_else(|| {
            GenError::invalid(format!(
                "room {room_idx} does not exist ({} rooms)",
                self.rooms.len()
            ))
        })?;
        if key.level != self.level() || room.wall_side(key.col, key.row).is_none() {
            return Err(GenError::invalid(format!(
                "{key} is not on a wall of room {room_idx}"
            )));
        }
        self.register_door(room_idx, key);
        Ok(())
    }

    /// Open or close a door, keeping the blocked set in step
    pub fn set_door_open(&mut self, key: TileKey, open: bool) -> Result<(), GenError> {
        let door = self
            .doors
            .get_mut(&key)
            .ok_or(GenError::UnknownDoor { key })?;
        door.open = open;
        if open {
            self.blocked.remove(&key);
        } else {
            self.blocked.insert(key);
        }
        Ok(())
    }

    /// Flip a door. Returns the new `open` state.
    pub fn toggle_door(&mut self, key: TileKey) -> Result<bool, GenError> {
        let open = !self
            .doors
            .get(&key)
            .ok_or(GenError::UnknownDoor { key })?
            .open;
        self.set_door_open(key, open)?;
        Ok(open)
    }

    /// Spawn point: inset from room 0's top-left corner, clamped to the grid
    fn spawn(&self) -> TileKey {
        let level = self.level();
        match self.rooms.first() {
            Some(room) => self.world.clamp(TileKey::new(
                room.rect.left + SPAWN_INSET,
                room.rect.top + SPAWN_INSET,
                level,
            )),
            None => {
                let (col, row) = self.world.center();
                TileKey::new(col, row, level)
            }
        }
    }

    /// Rebuild walls and copy everything into an immutable [`Dungeon`]
    pub fn freeze(self) -> Dungeon {
        let spawn = self.spawn();
        let walls = derive_walls(&self.rooms, self.level());
        let mut meta = self.meta;
        meta.placed_rooms = self.rooms.len() as u32;
        Dungeon {
            world: self.world,
            meta,
            rooms: self.rooms,
            spawn,
            floor: self.floor.into_iter().collect(),
            blocked: self.blocked.into_iter().collect(),
            doors: self.doors.into_iter().collect(),
            walls,
        }
    }
}
