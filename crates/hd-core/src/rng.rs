//! Random number sources for dungeon generation
//!
//! Generation never touches a global RNG. Everything random flows through a
//! [`RandomSource`] handed to the builder, so a seed (or a recorded sequence)
//! reproduces a dungeon exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Largest f64 below 1.0
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// A source of uniformly distributed floats in `[0, 1)`.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `lo..=hi`.
    ///
    /// Computed as `lo + floor(r * (hi - lo + 1))` so that any source producing
    /// the same float sequence yields the same integers. Returns `lo` when
    /// `hi <= lo`.
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo + 1) as f64;
        let offset = (self.next_f64() * span).floor() as i32;
        (lo + offset).min(hi)
    }

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let i = (self.next_f64() * len as f64).floor() as usize;
        i.min(len - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Seeded generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Only the seed is serialized; deserializing restarts the stream.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Adapts a closure returning floats in `[0, 1)` into a [`RandomSource`].
///
/// Values outside the range are clamped, so a scripted sequence can't push
/// sampled integers past their bounds.
pub struct FnRng<F>(pub F);

impl<F: FnMut() -> f64> RandomSource for FnRng<F> {
    fn next_f64(&mut self) -> f64 {
        let r = (self.0)();
        if r.is_nan() {
            0.0
        } else {
            r.clamp(0.0, BELOW_ONE)
        }
    }
}

/// Replays a fixed sequence, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let r = self.values[self.pos % self.values.len()];
        self.pos += 1;
        r.clamp(0.0, BELOW_ONE)
    }
}
