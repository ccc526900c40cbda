//! The player's gopher
//!
//! The player never really moves. Jumping raises a vertical offset above the
//! anchor and ducking pulls the sprite back toward the left edge; both
//! offsets return to zero before the next maneuver may start.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{FlipClock, Pose, SheetId};
use super::collision::Aabb;
use crate::consts::*;
use crate::grounded_y;
use crate::tuning::Tuning;

/// Player maneuver state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerMotion {
    #[default]
    Idle,
    JumpRising,
    JumpFalling,
    DuckReceding,
    DuckReturning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Rendered center, derived from the anchor and the two offsets
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub anchor: Vec2,
    pub jump_height: f32,
    pub jump_ceiling: f32,
    pub recede_offset: f32,
    pub speed: f32,
    /// Falling speed as a fraction of `speed`
    pub fall_ratio: f32,
    pub motion: PlayerMotion,
    pub flip: FlipClock,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        let anchor = Vec2::new(PLAYER_ANCHOR_X, grounded_y(PLAYER_HEIGHT));
        Self {
            position: anchor,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            anchor,
            jump_height: 0.0,
            jump_ceiling: tuning.player_jump_ceiling,
            recede_offset: 0.0,
            speed: tuning.player_speed,
            fall_ratio: tuning.player_fall_ratio,
            motion: PlayerMotion::Idle,
            flip: FlipClock::default(),
        }
    }

    pub fn is_jumping(&self) -> bool {
        matches!(self.motion, PlayerMotion::JumpRising | PlayerMotion::JumpFalling)
    }

    pub fn is_ducking(&self) -> bool {
        matches!(self.motion, PlayerMotion::DuckReceding | PlayerMotion::DuckReturning)
    }

    /// Start a jump. Ignored unless idle.
    pub fn request_jump(&mut self) -> bool {
        if self.motion != PlayerMotion::Idle {
            return false;
        }
        self.motion = PlayerMotion::JumpRising;
        true
    }

    /// Start a duck. Ignored unless idle.
    pub fn request_duck(&mut self) -> bool {
        if self.motion != PlayerMotion::Idle {
            return false;
        }
        self.motion = PlayerMotion::DuckReceding;
        true
    }

    /// Furthest the duck pulls the player back
    pub fn recede_limit(&self) -> f32 {
        self.anchor.x - self.width / 2.0
    }

    /// Advance the maneuver by `dt` seconds
    pub fn advance(&mut self, dt: f32, tuning: &Tuning) {
        let step = self.speed * dt;
        match self.motion {
            PlayerMotion::Idle => {}
            PlayerMotion::JumpRising => {
                self.jump_height += step;
                if self.jump_height >= self.jump_ceiling {
                    self.jump_height = self.jump_ceiling;
                    self.motion = PlayerMotion::JumpFalling;
                }
            }
            PlayerMotion::JumpFalling => {
                self.jump_height -= step * self.fall_ratio;
                if self.jump_height <= 0.0 {
                    self.jump_height = 0.0;
                    self.motion = PlayerMotion::Idle;
                }
            }
            PlayerMotion::DuckReceding => {
                self.recede_offset += step;
                let limit = self.recede_limit();
                if self.recede_offset >= limit {
                    self.recede_offset = limit;
                    self.motion = PlayerMotion::DuckReturning;
                }
            }
            PlayerMotion::DuckReturning => {
                self.recede_offset -= step;
                if self.recede_offset <= 0.0 {
                    self.recede_offset = 0.0;
                    self.motion = PlayerMotion::Idle;
                }
            }
        }

        self.position = Vec2::new(
            self.anchor.x - self.recede_offset,
            self.anchor.y + self.jump_height,
        );

        if self.motion == PlayerMotion::Idle {
            self.flip.accumulate(dt, tuning.flip_interval);
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position, self.width, self.height)
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            sheet: SheetId::Gopher,
            cell: self.flip.frame.index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::anim::Frame;

    #[test]
    fn test_starts_at_anchor() {
        let player = Player::new(&Tuning::default());
        assert_eq!(player.position, Vec2::new(200.0, 224.5));
        assert_eq!(player.motion, PlayerMotion::Idle);
        assert_eq!(player.recede_limit(), 170.0);
    }

    #[test]
    fn test_jump_cycle() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        assert!(player.request_jump());
        assert!(!player.request_jump());
        assert!(!player.request_duck());

        player.advance(0.5, &tuning);
        assert_eq!(player.jump_height, 250.0);
        assert_eq!(player.position.y, 474.5);

        player.advance(0.6, &tuning);
        assert_eq!(player.jump_height, 500.0);
        assert_eq!(player.motion, PlayerMotion::JumpFalling);

        // Falls at 400 units/s
        player.advance(0.5, &tuning);
        assert_eq!(player.jump_height, 300.0);

        player.advance(1.0, &tuning);
        assert_eq!(player.jump_height, 0.0);
        assert_eq!(player.motion, PlayerMotion::Idle);
        assert_eq!(player.position, player.anchor);
    }

    #[test]
    fn test_duck_cycle() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        assert!(player.request_duck());
        assert!(!player.request_jump());

        player.advance(0.2, &tuning);
        assert_eq!(player.recede_offset, 100.0);
        assert_eq!(player.position.x, 100.0);

        player.advance(0.2, &tuning);
        assert_eq!(player.recede_offset, 170.0);
        assert_eq!(player.motion, PlayerMotion::DuckReturning);
        assert_eq!(player.position.x, 30.0);

        player.advance(1.0, &tuning);
        assert_eq!(player.recede_offset, 0.0);
        assert_eq!(player.motion, PlayerMotion::Idle);
        assert_eq!(player.position.x, 200.0);
    }

    #[test]
    fn test_flip_only_when_idle() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.request_jump();
        for _ in 0..10 {
            player.advance(0.1, &tuning);
        }
        assert_eq!(player.flip.timer, 0.0);
        assert_eq!(player.flip.frame, Frame::A);

        let mut idle = Player::new(&tuning);
        idle.advance(0.3, &tuning);
        idle.advance(0.3, &tuning);
        assert_eq!(idle.flip.frame, Frame::B);
    }
}
