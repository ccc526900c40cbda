//! Scrolling background tiles
//!
//! Tiles launch just past the right edge, scroll left at a constant speed and
//! are dropped once they are well past the left edge. Consecutive tiles never
//! repeat the same sprite.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{Pose, SheetId};
use super::rng::RandomSource;
use crate::consts::*;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackdropTile {
    /// Cell on the backdrop sheet
    pub sprite: u32,
    pub x: f32,
}

impl BackdropTile {
    pub fn new(sprite: u32) -> Self {
        Self {
            sprite,
            x: TILE_SPAWN_X,
        }
    }

    /// Scroll left. Returns true once the tile is past the trailing threshold.
    pub fn advance(&mut self, dt: f32, speed: f32) -> bool {
        self.x -= speed * dt;
        self.x < TILE_EXIT_X
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: Vec2::new(self.x, TILE_Y),
            sheet: SheetId::Backdrop,
            cell: self.sprite as usize,
        }
    }
}

/// Decides when the next tile launches and which sprite it shows
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BackdropScheduler {
    /// Seconds since the last launch; `None` until the first tile, which
    /// launches on the first update
    pub since_last_tile: Option<f32>,
    pub last_sprite: u32,
}

impl BackdropScheduler {
    pub fn update(
        &mut self,
        dt: f32,
        tuning: &Tuning,
        rng: &mut impl RandomSource,
    ) -> Option<BackdropTile> {
        let due = self
            .since_last_tile
            .is_none_or(|elapsed| elapsed > tuning.tile_interval);

        let tile = if due {
            self.since_last_tile = Some(0.0);
            let sprite = self.next_sprite(tuning.tile_count, rng);
            self.last_sprite = sprite;
            Some(BackdropTile::new(sprite))
        } else {
            None
        };

        if let Some(elapsed) = self.since_last_tile.as_mut() {
            *elapsed += dt;
        }
        tile
    }

    /// Uniform over every sprite except the previous one
    fn next_sprite(&self, count: u32, rng: &mut impl RandomSource) -> u32 {
        if count <= 1 {
            return 0;
        }
        let pick = rng.below(count - 1);
        if pick >= self.last_sprite { pick + 1 } else { pick }
    }
}
