//! Dungeon builder
//!
//! Ties placement, corridor routing and freezing together. A builder owns its
//! world and random source; each build starts from fresh collections.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::corridor::route_corridors;
use super::placement::place_rooms;
use super::sizing::compute_room_count;
use super::{Dungeon, DungeonDraft, DungeonMeta, GridNav, TileKey, WallSide, World};
use crate::consts::{
    CORRIDOR_WIDTH, DEFAULT_MARGIN, DEFAULT_MAX_ROOM_ATTEMPTS, DEFAULT_ROOM_MAX_H,
    DEFAULT_ROOM_MAX_W, DEFAULT_ROOM_MIN_H, DEFAULT_ROOM_MIN_W, DEFAULT_ROOM_PAD, MIN_ROOM_H,
    MIN_ROOM_W, SINGLE_ROOM_H, SINGLE_ROOM_W,
};
use crate::error::GenError;
use crate::rng::{GameRng, RandomSource};

/// Knobs for one build. Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildParams {
    pub player_level: i32,
    pub monster_level: i32,
    pub difficulty_level: i32,
    /// Level stamped into every tile key
    pub z: i32,
    pub room_min_w: i32,
    pub room_max_w: i32,
    pub room_min_h: i32,
    pub room_max_h: i32,
    /// Clearance kept around every placed room
    pub room_pad: i32,
    /// Attempts per room after the first
    pub max_room_attempts: u32,
    /// Only 1 is supported
    pub corridor_width: u32,
    /// Minimum distance between a room and the grid edge
    pub margin: i32,
    /// Overrides the room count derived from the levels
    pub room_count: Option<u32>,
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            player_level: 1,
            monster_level: 1,
            difficulty_level: 0,
            z: 0,
            room_min_w: DEFAULT_ROOM_MIN_W,
            room_max_w: DEFAULT_ROOM_MAX_W,
            room_min_h: DEFAULT_ROOM_MIN_H,
            room_max_h: DEFAULT_ROOM_MAX_H,
            room_pad: DEFAULT_ROOM_PAD,
            max_room_attempts: DEFAULT_MAX_ROOM_ATTEMPTS,
            corridor_width: CORRIDOR_WIDTH,
            margin: DEFAULT_MARGIN,
            room_count: None,
        }
    }
}

impl BuildParams {
    /// Rooms a build will try to place
    pub fn target_room_count(&self) -> u32 {
        self.room_count.unwrap_or_else(|| {
            compute_room_count(self.player_level, self.monster_level, self.difficulty_level)
        })
    }

    pub fn validate(&self) -> Result<(), GenError> {
        if self.room_min_w < 1 || self.room_min_h < 1 {
            return Err(GenError::invalid(format!(
                "minimum room size {}x{} must be positive",
                self.room_min_w, self.room_min_h
            )));
        }
        if self.room_min_w > self.room_max_w || self.room_min_h > self.room_max_h {
            return Err(GenError::invalid(format!(
                "room size range {}..={} x {}..={} is empty",
                self.room_min_w, self.room_max_w, self.room_min_h, self.room_max_h
            )));
        }
        if self.room_max_w < MIN_ROOM_W || self.room_max_h < MIN_ROOM_H {
            return Err(GenError::invalid(format!(
                "maximum room size {}x{} is below {MIN_ROOM_W}x{MIN_ROOM_H}",
                self.room_max_w, self.room_max_h
            )));
        }
        if self.room_pad < 0 || self.margin < 0 {
            return Err(GenError::invalid("room_pad and margin must not be negative"));
        }
        if self.max_room_attempts == 0 {
            return Err(GenError::invalid("max_room_attempts must be at least 1"));
        }
        if self.corridor_width != CORRIDOR_WIDTH {
            return Err(GenError::invalid(format!(
                "corridor_width {} unsupported, only {CORRIDOR_WIDTH}",
                self.corridor_width
            )));
        }
        Ok(())
    }

    fn meta_for(&self, world: &World) -> DungeonMeta {
        DungeonMeta {
            player_level: self.player_level,
            monster_level: self.monster_level,
            difficulty_level: self.difficulty_level,
            level: self.z,
            width: world.width(),
            height: world.height(),
            requested_rooms: self.target_room_count(),
            ..DungeonMeta::default()
        }
    }
}

/// Builds dungeons into one world from one random source
#[derive(Debug, Clone)]
pub struct DungeonBuilder<R: RandomSource = GameRng> {
    world: World,
    rng: R,
}

impl DungeonBuilder<GameRng> {
    /// Builder driven by a ChaCha stream from `seed`
    pub fn seeded(world: World, seed: u64) -> Self {
        Self::new(world, GameRng::new(seed))
    }
}

impl<R: RandomSource> DungeonBuilder<R> {
    pub fn new(world: World, rng: R) -> Self {
        Self { world, rng }
    }

    /// Place rooms, join consecutive ones with corridors, and freeze.
    ///
    /// Only a first room that can't be centered is an error. Rooms that run
    /// out of attempts and corridors that can't be routed shrink the result
    /// and are counted in its [`DungeonMeta`].
    pub fn build_dungeon(&mut self, params: &BuildParams) -> Result<Dungeon, GenError> {
        params.validate()?;
        let meta = params.meta_for(&self.world);
        let target = meta.requested_rooms;
        let mut draft = DungeonDraft::new(self.world, meta);

        let placed = place_rooms(&self.world, &mut self.rng, params, target, &mut draft)?;
        let report = route_corridors(&self.world, &mut draft);
        draft.meta.corridors_routed = report.routed;
        draft.meta.corridors_failed = report.failed;

        let dungeon = draft.freeze();
        info!(
            "built {}x{} dungeon on level {}: {placed}/{target} rooms, {} corridors ({} failed), {} doors",
            self.world.width(),
            self.world.height(),
            params.z,
            report.routed,
            report.failed,
            dungeon.doors().len()
        );
        Ok(dungeon)
    }

    /// A single fixed-size room with a door on its bottom wall
    pub fn build_default(&mut self) -> Result<Dungeon, GenError> {
        let params = BuildParams {
            room_min_w: SINGLE_ROOM_W,
            room_max_w: SINGLE_ROOM_W,
            room_min_h: SINGLE_ROOM_H,
            room_max_h: SINGLE_ROOM_H,
            max_room_attempts: 1,
            room_count: Some(1),
            ..BuildParams::default()
        };
        let dungeon = self.build_dungeon(&params)?;

        let Some(room) = dungeon.rooms().first() else {
            return Ok(dungeon);
        };
        if room.doors_on(WallSide::Bottom).next().is_some() {
            return Ok(dungeon);
        }

        let (col, _) = room.center();
        let door = TileKey::new(col, room.rect.bottom, params.z);
        debug!("adding bottom door at {door}");
        let mut draft = dungeon.to_draft();
        draft.add_door(0, door)?;
        Ok(draft.freeze())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;

    #[test]
    fn test_params_json_defaults() {
        let params: BuildParams =
            serde_json::from_str(r#"{"difficulty_level": 2, "room_count": 4}"#).unwrap();
        assert_eq!(params.difficulty_level, 2);
        assert_eq!(params.room_count, Some(4));
        assert_eq!(params.room_max_w, DEFAULT_ROOM_MAX_W);
        assert_eq!(params.max_room_attempts, DEFAULT_MAX_ROOM_ATTEMPTS);
    }

    #[test]
    fn test_validate() {
        assert!(BuildParams::default().validate().is_ok());

        let bad = [
            BuildParams {
                room_min_w: 12,
                ..BuildParams::default()
            },
            BuildParams {
                room_min_h: 0,
                ..BuildParams::default()
            },
            BuildParams {
                room_min_w: 3,
                room_max_w: 4,
                ..BuildParams::default()
            },
            BuildParams {
                max_room_attempts: 0,
                ..BuildParams::default()
            },
            BuildParams {
                corridor_width: 2,
                ..BuildParams::default()
            },
            BuildParams {
                margin: -1,
                ..BuildParams::default()
            },
        ];
        for params in bad {
            assert!(
                matches!(params.validate(), Err(GenError::InvalidParams { .. })),
                "{params:?}"
            );
        }
    }

    #[test]
    fn test_target_room_count() {
        let params = BuildParams {
            player_level: 5,
            difficulty_level: 1,
            ..BuildParams::default()
        };
        assert_eq!(params.target_room_count(), 10);
        let params = BuildParams {
            room_count: Some(2),
            ..params
        };
        assert_eq!(params.target_room_count(), 2);
    }

    #[test]
    fn test_build_records_meta() {
        let world = World::new(60, 50).unwrap();
        let mut builder = DungeonBuilder::seeded(world, 11);
        let params = BuildParams {
            z: 3,
            ..BuildParams::default()
        };
        let dungeon = builder.build_dungeon(&params).unwrap();
        let meta = dungeon.meta();
        assert_eq!(meta.level, 3);
        assert_eq!((meta.width, meta.height), (60, 50));
        assert_eq!(meta.requested_rooms, 5);
        assert_eq!(meta.placed_rooms as usize, dungeon.rooms().len());
        assert_eq!(
            meta.corridors_routed + meta.corridors_failed,
            meta.placed_rooms.saturating_sub(1)
        );
        assert!(dungeon.floor().iter().all(|k| k.level == 3));
    }

    #[test]
    fn test_build_default_one_room_with_bottom_door() {
        let world = World::new(20, 20).unwrap();
        let mut builder = DungeonBuilder::new(world, SequenceRng::new(vec![0.5]));
        let dungeon = builder.build_default().unwrap();

        assert_eq!(dungeon.rooms().len(), 1);
        let room = &dungeon.rooms()[0];
        assert_eq!((room.rect.width(), room.rect.height()), (9, 7));
        let bottom: Vec<_> = room.doors_on(WallSide::Bottom).collect();
        assert_eq!(bottom, vec![TileKey::new(room.center().0, room.rect.bottom, 0)]);
        assert_eq!(dungeon.doors().len(), 1);
        assert_eq!(dungeon.floor().len(), 7 * 5);
    }

    #[test]
    fn test_huge_room_pad_keeps_first_room_only() {
        let world = World::new(60, 50).unwrap();
        let params = BuildParams {
            room_pad: i32::MAX,
            room_count: Some(3),
            ..BuildParams::default()
        };
        assert!(params.validate().is_ok());
        let dungeon = DungeonBuilder::seeded(world, 1)
            .build_dungeon(&params)
            .unwrap();
        assert_eq!(dungeon.rooms().len(), 1);
        assert_eq!(dungeon.meta().requested_rooms, 3);
    }

    #[test]
    fn test_invalid_params_rejected_before_building() {
        let world = World::new(20, 20).unwrap();
        let mut builder = DungeonBuilder::seeded(world, 1);
        let params = BuildParams {
            corridor_width: 3,
            ..BuildParams::default()
        };
        assert!(builder.build_dungeon(&params).is_err());
    }
}
