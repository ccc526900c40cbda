//! Creature spawn scheduling
//!
//! Once `min_interval` seconds have accumulated the scheduler flips a coin.
//! Heads picks one registered creature kind uniformly; either way the timer
//! starts over, so spawns are at least `min_interval` apart and roughly half
//! of the intervals pass without one.

use serde::{Deserialize, Serialize};

use super::creature::CreatureKind;
use super::rng::RandomSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnScheduler {
    pub time_since_last_spawn: f32,
    pub min_interval: f32,
    /// Creature factories, selected by uniform index
    pub kinds: Vec<CreatureKind>,
}

impl SpawnScheduler {
    pub fn new(min_interval: f32) -> Self {
        Self::with_kinds(min_interval, CreatureKind::ALL.to_vec())
    }

    pub fn with_kinds(min_interval: f32, kinds: Vec<CreatureKind>) -> Self {
        Self {
            time_since_last_spawn: 0.0,
            min_interval,
            kinds,
        }
    }

    /// Accumulate `dt` and decide whether a creature spawns this frame
    pub fn update(&mut self, dt: f32, rng: &mut impl RandomSource) -> Option<CreatureKind> {
        self.time_since_last_spawn += dt;
        if self.time_since_last_spawn < self.min_interval {
            return None;
        }
        self.time_since_last_spawn = 0.0;

        if self.kinds.is_empty() || rng.below(2) != 1 {
            return None;
        }
        let index = rng.below(self.kinds.len() as u32) as usize;
        self.kinds.get(index).copied()
    }
}
