//! hd-core: procedural dungeon generation
//!
//! Builds room-and-corridor layouts on an odd-r hex grid. Room count scales
//! with the gap between player and monster levels. The crate does no I/O;
//! all randomness comes from an injected [`RandomSource`].

pub mod dungeon;
pub mod error;

mod consts;
mod rng;

pub use consts::*;
pub use error::GenError;
pub use rng::{FnRng, GameRng, RandomSource, SequenceRng};
