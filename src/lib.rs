//! Gopher Hunter - a side-scrolling jump-or-duck arcade game
//!
//! Core modules:
//! - `sim`: Simulation (player and creature motion, spawning, collisions, session lifecycle)
//! - `platform`: Host collaborators (frame clock, input, draw sink, sprite sheets)
//! - `tuning`: Data-driven game feel constants

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Playfield geometry constants
pub mod consts {
    /// Playfield dimensions (y axis points up)
    pub const PLAYFIELD_WIDTH: f32 = 1024.0;
    pub const PLAYFIELD_HEIGHT: f32 = 768.0;

    /// Ground line every grounded entity stands on
    pub const GROUND_Y: f32 = 200.0;

    /// Player bounding box and anchor
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 49.0;
    pub const PLAYER_ANCHOR_X: f32 = 200.0;

    /// Creature bounding boxes
    pub const RUNNER_WIDTH: f32 = 120.0;
    pub const RUNNER_HEIGHT: f32 = 31.0;
    pub const JUMPER_WIDTH: f32 = 59.0;
    pub const JUMPER_HEIGHT: f32 = 41.0;
    pub const FLOATER_WIDTH: f32 = 42.0;
    pub const FLOATER_HEIGHT: f32 = 60.0;

    /// Creatures enter here
    pub const SPAWN_X: f32 = PLAYFIELD_WIDTH;

    /// Backdrop tiles enter past the right edge and leave past the left
    pub const TILE_MARGIN: f32 = 150.0;
    pub const TILE_SPAWN_X: f32 = PLAYFIELD_WIDTH + TILE_MARGIN;
    pub const TILE_EXIT_X: f32 = -TILE_MARGIN;
    pub const TILE_Y: f32 = 350.0;
}

/// Center height for an entity of the given height resting on the ground
#[inline]
pub fn grounded_y(height: f32) -> f32 {
    consts::GROUND_Y + height / 2.0
}
