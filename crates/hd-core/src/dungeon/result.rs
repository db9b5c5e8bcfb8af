//! Finished dungeons
//!
//! A [`Dungeon`] is immutable once built: fields are private and only
//! exposed by shared reference. Ordered collections keep iteration order and
//! serialized output identical between runs with the same seed.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{DungeonDraft, GridNav, Room, TileKey, WallSegment, World};

/// A door's passability state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Door {
    pub open: bool,
}

/// What a dungeon was built from and how the build went
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DungeonMeta {
    pub player_level: i32,
    pub monster_level: i32,
    pub difficulty_level: i32,
    /// Level (z) every tile key carries
    pub level: i32,
    pub width: i32,
    pub height: i32,
    /// Rooms asked for
    pub requested_rooms: u32,
    /// Rooms actually placed; fewer than requested when placement ran out of attempts
    pub placed_rooms: u32,
    /// Room-to-room connections whose corridor search reached its goal
    pub corridors_routed: u32,
    /// Connections left without a carved path
    pub corridors_failed: u32,
}

/// A generated dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dungeon {
    #[serde(skip)]
    pub(crate) world: World,
    pub(crate) meta: DungeonMeta,
    pub(crate) rooms: Vec<Room>,
    pub(crate) spawn: TileKey,
    pub(crate) floor: BTreeSet<TileKey>,
    pub(crate) blocked: BTreeSet<TileKey>,
    #[serde(serialize_with = "door_list::serialize")]
    pub(crate) doors: BTreeMap<TileKey, Door>,
    pub(crate) walls: Vec<WallSegment>,
}

impl Dungeon {
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn meta(&self) -> &DungeonMeta {
        &self.meta
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn spawn(&self) -> TileKey {
        self.spawn
    }

    pub fn floor(&self) -> &BTreeSet<TileKey> {
        &self.floor
    }

    pub fn blocked(&self) -> &BTreeSet<TileKey> {
        &self.blocked
    }

    pub fn doors(&self) -> &BTreeMap<TileKey, Door> {
        &self.doors
    }

    pub fn walls(&self) -> &[WallSegment] {
        &self.walls
    }

    pub fn is_floor(&self, key: TileKey) -> bool {
        self.floor.contains(&key)
    }

    pub fn is_blocked(&self, key: TileKey) -> bool {
        self.blocked.contains(&key)
    }

    /// Walkable right now: an in-bounds floor tile or door that isn't blocked
    pub fn is_passable(&self, key: TileKey) -> bool {
        self.world.in_bounds(key)
            && !self.is_blocked(key)
            && (self.is_floor(key) || self.doors.contains_key(&key))
    }

    pub fn door_at(&self, key: TileKey) -> Option<Door> {
        self.doors.get(&key).copied()
    }

    /// Index of the room whose rectangle (walls included) covers `key`
    pub fn room_at(&self, key: TileKey) -> Option<usize> {
        if key.level != self.meta.level {
            return None;
        }
        self.rooms
            .iter()
            .position(|room| room.rect.contains(key.col, key.row))
    }

    /// Fresh mutable copies of every collection, for building a variant
    pub fn to_draft(&self) -> DungeonDraft {
        DungeonDraft {
            world: self.world,
            meta: self.meta.clone(),
            rooms: self.rooms.clone(),
            floor: self.floor.iter().copied().collect(),
            blocked: self.blocked.iter().copied().collect(),
            doors: self.doors.iter().map(|(k, d)| (*k, *d)).collect(),
        }
    }
}

/// Doors serialize as a list: JSON object keys must be strings.
mod door_list {
    use std::collections::BTreeMap;

    use serde::ser::SerializeSeq;
    use serde::{Serialize, Serializer};

    use super::{Door, TileKey};

    #[derive(Serialize)]
    struct DoorRecord {
        tile: TileKey,
        open: bool,
    }

    pub fn serialize<S>(doors: &BTreeMap<TileKey, Door>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(doors.len()))?;
        for (tile, door) in doors {
            seq.serialize_element(&DoorRecord {
                tile: *tile,
                open: door.open,
            })?;
        }
        seq.end()
    }
}
