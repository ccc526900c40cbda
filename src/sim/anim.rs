//! Two-frame sprite animation and the logical pose handed to the draw sink

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which of an entity's two sprite frames is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Frame {
    #[default]
    A,
    B,
}

impl Frame {
    pub fn flipped(self) -> Self {
        match self {
            Frame::A => Frame::B,
            Frame::B => Frame::A,
        }
    }

    /// Cell index on a two-frame sheet
    pub fn index(self) -> usize {
        match self {
            Frame::A => 0,
            Frame::B => 1,
        }
    }
}

/// Logical sprite sheets the core refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetId {
    Gopher,
    Snake,
    Crab,
    Cup,
    Backdrop,
    /// Explosion shown over the player on game over
    Boom,
}

/// Alternates frames every `interval` accumulated seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlipClock {
    pub frame: Frame,
    pub timer: f32,
}

impl FlipClock {
    /// Add `dt` to the timer and flip once it passes `interval`
    pub fn accumulate(&mut self, dt: f32, interval: f32) {
        self.timer += dt;
        if self.timer > interval {
            self.frame = self.frame.flipped();
            self.timer = 0.0;
        }
    }
}

/// What the draw sink receives for one entity in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec2,
    pub sheet: SheetId,
    /// Frame A/B for animated entities, tile index for backdrop tiles
    pub cell: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_after_interval() {
        let mut clock = FlipClock::default();
        clock.accumulate(0.3, 0.5);
        assert_eq!(clock.frame, Frame::A);
        clock.accumulate(0.3, 0.5);
        assert_eq!(clock.frame, Frame::B);
        assert_eq!(clock.timer, 0.0);
    }

    #[test]
    fn test_exact_interval_does_not_flip() {
        let mut clock = FlipClock::default();
        clock.accumulate(0.5, 0.5);
        assert_eq!(clock.frame, Frame::A);
        assert_eq!(clock.timer, 0.5);
    }
}
