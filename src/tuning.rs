//! Game feel tuning
//!
//! Timing and speed constants were tuned by hand until the game "felt" right.
//! They live here as defaults so a JSON file can override any subset of them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Animation ===
    /// Seconds between sprite frame flips
    pub flip_interval: f32,

    // === Spawning ===
    /// Minimum seconds between spawn attempts
    pub spawn_interval: f32,

    // === Creatures ===
    pub runner_speed: f32,
    pub jumper_speed: f32,
    /// Maximum jump height above the ground line
    pub jumper_ceiling: f32,
    /// A grounded jumper leaps when a draw in `[0, jump_odds)` hits 1
    pub jump_odds: u32,
    /// Floater speed is `floater_speed / k` with `k` in `1..=floater_max_divisor`
    pub floater_speed: f32,
    pub floater_max_divisor: u32,
    /// Floater altitude band, lower bound inclusive, upper exclusive
    pub floater_min_y: f32,
    pub floater_max_y: f32,

    // === Player ===
    pub player_speed: f32,
    pub player_jump_ceiling: f32,
    /// Falling speed as a fraction of rising speed
    pub player_fall_ratio: f32,

    // === Backdrop ===
    /// Horizontal scroll speed of background tiles
    pub backdrop_speed: f32,
    /// Seconds a tile timer must exceed before the next tile launches
    pub tile_interval: f32,
    /// Number of distinct tiles on the backdrop sheet
    pub tile_count: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            flip_interval: 0.5,

            spawn_interval: 5.0,

            runner_speed: 100.0,
            jumper_speed: 120.0,
            jumper_ceiling: 250.0,
            jump_odds: 90,
            floater_speed: 80.0,
            floater_max_divisor: 3,
            floater_min_y: 330.0,
            floater_max_y: 738.0,

            player_speed: 500.0,
            player_jump_ceiling: 500.0,
            player_fall_ratio: 0.8,

            backdrop_speed: 50.0,
            tile_interval: 5.0,
            tile_count: 4,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        positive("flip_interval", self.flip_interval)?;
        positive("spawn_interval", self.spawn_interval)?;
        positive("runner_speed", self.runner_speed)?;
        positive("jumper_speed", self.jumper_speed)?;
        positive("jumper_ceiling", self.jumper_ceiling)?;
        positive("floater_speed", self.floater_speed)?;
        positive("player_speed", self.player_speed)?;
        positive("player_jump_ceiling", self.player_jump_ceiling)?;
        positive("player_fall_ratio", self.player_fall_ratio)?;
        positive("backdrop_speed", self.backdrop_speed)?;
        positive("tile_interval", self.tile_interval)?;

        if self.jump_odds < 2 {
            return Err(TuningError::Invalid {
                field: "jump_odds",
                reason: "must be at least 2",
            });
        }
        if self.floater_max_divisor == 0 {
            return Err(TuningError::Invalid {
                field: "floater_max_divisor",
                reason: "must be at least 1",
            });
        }
        if self.floater_band_span() == 0 {
            return Err(TuningError::Invalid {
                field: "floater_max_y",
                reason: "must be at least one unit above floater_min_y",
            });
        }
        if self.tile_count == 0 {
            return Err(TuningError::Invalid {
                field: "tile_count",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Number of whole units a floater may be placed in
    pub fn floater_band_span(&self) -> u32 {
        let span = self.floater_max_y - self.floater_min_y;
        if span.is_finite() && span >= 1.0 {
            span as u32
        } else {
            0
        }
    }
}
