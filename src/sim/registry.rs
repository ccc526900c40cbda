//! Active creature and backdrop tile collections
//!
//! Exits are collected as indices during the update pass and removed
//! afterwards. Removal marks the collected positions and filters, so indices
//! collected earlier in the frame stay valid no matter how many are removed.

use serde::{Deserialize, Serialize};

use super::anim::Pose;
use super::backdrop::BackdropTile;
use super::creature::Creature;
use super::rng::RandomSource;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityRegistry {
    pub creatures: Vec<Creature>,
    pub tiles: Vec<BackdropTile>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every creature; returns the indices that exited
    pub fn advance_creatures(
        &mut self,
        dt: f32,
        tuning: &Tuning,
        rng: &mut impl RandomSource,
    ) -> Vec<usize> {
        let mut exited = Vec::new();
        for (index, creature) in self.creatures.iter_mut().enumerate() {
            if creature.advance(dt, tuning, rng) {
                exited.push(index);
            }
        }
        exited
    }

    /// Scroll every tile; returns the indices that went off-screen
    pub fn advance_tiles(&mut self, dt: f32, speed: f32) -> Vec<usize> {
        self.tiles
            .iter_mut()
            .enumerate()
            .filter_map(|(index, tile)| tile.advance(dt, speed).then_some(index))
            .collect()
    }

    /// Remove the exits collected this frame
    pub fn prune(&mut self, creature_exits: &[usize], tile_exits: &[usize]) {
        remove_indices(&mut self.creatures, creature_exits);
        remove_indices(&mut self.tiles, tile_exits);
    }

    /// Poses in draw order: backdrop first, then creatures
    pub fn poses(&self) -> impl Iterator<Item = Pose> + '_ {
        self.tiles
            .iter()
            .map(BackdropTile::pose)
            .chain(self.creatures.iter().map(Creature::pose))
    }
}

/// Remove the elements at `indices` (positions in `items` before any
/// removal). Order and duplicates in `indices` do not matter. An
/// out-of-range index is a caller bug: it trips a debug assertion and is
/// skipped in release builds.
pub fn remove_indices<T>(items: &mut Vec<T>, indices: &[usize]) {
    if indices.is_empty() {
        return;
    }
    let mut marked = vec![false; items.len()];
    for &index in indices {
        debug_assert!(index < items.len(), "exit index {index} out of range");
        if let Some(mark) = marked.get_mut(index) {
            *mark = true;
        }
    }
    let mut position = 0;
    items.retain(|_| {
        let keep = !marked[position];
        position += 1;
        keep
    });
}
