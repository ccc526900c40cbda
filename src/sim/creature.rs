//! Creatures: the obstacles the player has to avoid
//!
//! Three behaviors share one struct. Horizontal drift and frame flipping are
//! common; the jumper adds a vertical Grounded -> Rising -> Falling cycle,
//! and the floater picks its speed and altitude once at spawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{FlipClock, Pose, SheetId};
use super::collision::Aabb;
use super::rng::RandomSource;
use crate::consts::*;
use crate::grounded_y;
use crate::tuning::Tuning;

/// Horizontal travel sign for every creature (toward the player)
pub const DIRECTION_LEFT: f32 = -1.0;

/// Creature types the spawn scheduler can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    /// Ground-hugging snake
    RunnerLow,
    /// Crab that leaps at random
    Jumper,
    /// Cup drifting at a random altitude and speed
    Floater,
}

impl CreatureKind {
    /// Factory registry, in selection order
    pub const ALL: [CreatureKind; 3] = [
        CreatureKind::RunnerLow,
        CreatureKind::Jumper,
        CreatureKind::Floater,
    ];

    pub fn sheet(self) -> SheetId {
        match self {
            CreatureKind::RunnerLow => SheetId::Snake,
            CreatureKind::Jumper => SheetId::Crab,
            CreatureKind::Floater => SheetId::Cup,
        }
    }

    /// Bounding box (width, height)
    pub fn size(self) -> (f32, f32) {
        match self {
            CreatureKind::RunnerLow => (RUNNER_WIDTH, RUNNER_HEIGHT),
            CreatureKind::Jumper => (JUMPER_WIDTH, JUMPER_HEIGHT),
            CreatureKind::Floater => (FLOATER_WIDTH, FLOATER_HEIGHT),
        }
    }
}

/// Vertical phase of a jumper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpPhase {
    #[default]
    Grounded,
    Rising,
    Falling,
}

/// Jumper-only vertical state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpState {
    pub phase: JumpPhase,
    /// Current offset above the baseline, always in `[0, ceiling]`
    pub height: f32,
    pub ceiling: f32,
    pub baseline: f32,
}

impl JumpState {
    fn step(&mut self, rate: f32, dt: f32) {
        let delta = rate * dt;
        match self.phase {
            JumpPhase::Grounded => {}
            JumpPhase::Rising => {
                self.height += delta;
                if self.height >= self.ceiling {
                    self.height = self.ceiling;
                    self.phase = JumpPhase::Falling;
                }
            }
            JumpPhase::Falling => {
                self.height -= delta;
                if self.height <= 0.0 {
                    self.height = 0.0;
                    self.phase = JumpPhase::Grounded;
                }
            }
        }
    }
}

/// Per-variant behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    RunnerLow,
    Jumper(JumpState),
    Floater,
}

/// A creature entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub behavior: Behavior,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub direction: f32,
    pub flip: FlipClock,
}

impl Creature {
    /// Build a creature of `kind` at the right edge of the playfield
    pub fn spawn(kind: CreatureKind, id: u32, tuning: &Tuning, rng: &mut impl RandomSource) -> Self {
        let (width, height) = kind.size();
        let (behavior, y, speed) = match kind {
            CreatureKind::RunnerLow => (Behavior::RunnerLow, grounded_y(height), tuning.runner_speed),
            CreatureKind::Jumper => {
                let baseline = grounded_y(height);
                let jump = JumpState {
                    phase: JumpPhase::Grounded,
                    height: 0.0,
                    ceiling: tuning.jumper_ceiling,
                    baseline,
                };
                (Behavior::Jumper(jump), baseline, tuning.jumper_speed)
            }
            CreatureKind::Floater => {
                let y = tuning.floater_min_y + rng.below(tuning.floater_band_span()) as f32;
                let divisor = rng.below(tuning.floater_max_divisor) + 1;
                (Behavior::Floater, y, tuning.floater_speed / divisor as f32)
            }
        };

        Self {
            id,
            behavior,
            position: Vec2::new(SPAWN_X, y),
            width,
            height,
            speed,
            direction: DIRECTION_LEFT,
            flip: FlipClock::default(),
        }
    }

    pub fn kind(&self) -> CreatureKind {
        match self.behavior {
            Behavior::RunnerLow => CreatureKind::RunnerLow,
            Behavior::Jumper(_) => CreatureKind::Jumper,
            Behavior::Floater => CreatureKind::Floater,
        }
    }

    /// Advance by `dt` seconds. Returns true once the creature has left the
    /// playfield on the left.
    pub fn advance(&mut self, dt: f32, tuning: &Tuning, rng: &mut impl RandomSource) -> bool {
        match &mut self.behavior {
            Behavior::RunnerLow | Behavior::Floater => {
                self.position.x += self.direction * self.speed * dt;
                self.flip.accumulate(dt, tuning.flip_interval);
            }
            Behavior::Jumper(jump) => {
                jump.step(self.speed * 2.0, dt);
                self.position.x += self.direction * self.speed * dt;
                self.position.y = jump.baseline + jump.height;

                // No frame flips mid-air; a grounded jumper may take off next frame
                if jump.phase == JumpPhase::Grounded {
                    self.flip.accumulate(dt, tuning.flip_interval);
                    if rng.below(tuning.jump_odds) == 1 {
                        jump.phase = JumpPhase::Rising;
                    }
                }
            }
        }
        self.has_exited()
    }

    pub fn has_exited(&self) -> bool {
        self.position.x < -self.width / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position, self.width, self.height)
    }

    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            sheet: self.kind().sheet(),
            cell: self.flip.frame.index(),
        }
    }

    /// Vertical state, for jumpers only
    pub fn jump(&self) -> Option<&JumpState> {
        match &self.behavior {
            Behavior::Jumper(jump) => Some(jump),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::anim::Frame;

    /// Returns `value` clamped into every requested range
    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn below(&mut self, n: u32) -> u32 {
            self.0.min(n - 1)
        }
    }

    #[test]
    fn test_runner_spawn_and_drift() {
        let tuning = Tuning::default();
        let mut runner = Creature::spawn(CreatureKind::RunnerLow, 1, &tuning, &mut Fixed(0));
        assert_eq!(runner.position, Vec2::new(1024.0, 215.5));
        assert_eq!(runner.speed, 100.0);

        let exited = runner.advance(0.25, &tuning, &mut Fixed(0));
        assert!(!exited);
        assert_eq!(runner.position.x, 999.0);
        assert_eq!(runner.position.y, 215.5);
    }

    #[test]
    fn test_exit_threshold() {
        let tuning = Tuning::default();
        let mut runner = Creature::spawn(CreatureKind::RunnerLow, 1, &tuning, &mut Fixed(0));
        runner.position.x = -59.0;
        assert!(!runner.advance(0.0, &tuning, &mut Fixed(0)));
        runner.position.x = -60.5;
        assert!(runner.advance(0.0, &tuning, &mut Fixed(0)));
    }

    #[test]
    fn test_frame_flips_while_drifting() {
        let tuning = Tuning::default();
        let mut runner = Creature::spawn(CreatureKind::RunnerLow, 1, &tuning, &mut Fixed(0));
        runner.advance(0.3, &tuning, &mut Fixed(0));
        assert_eq!(runner.flip.frame, Frame::A);
        runner.advance(0.3, &tuning, &mut Fixed(0));
        assert_eq!(runner.flip.frame, Frame::B);
        assert_eq!(runner.pose().cell, 1);
        assert_eq!(runner.pose().sheet, SheetId::Snake);
    }

    #[test]
    fn test_floater_speed_and_altitude() {
        let tuning = Tuning::default();
        // Fixed(2): altitude offset 2, divisor 3
        let cup = Creature::spawn(CreatureKind::Floater, 1, &tuning, &mut Fixed(2));
        assert_eq!(cup.position.y, 332.0);
        assert!((cup.speed - 80.0 / 3.0).abs() < 1e-4);

        let cup = Creature::spawn(CreatureKind::Floater, 2, &tuning, &mut Fixed(0));
        assert_eq!(cup.position.y, 330.0);
        assert_eq!(cup.speed, 80.0);

        let cup = Creature::spawn(CreatureKind::Floater, 3, &tuning, &mut Fixed(u32::MAX));
        assert_eq!(cup.position.y, 737.0);
    }

    #[test]
    fn test_jumper_full_arc() {
        let tuning = Tuning::default();
        let mut crab = Creature::spawn(CreatureKind::Jumper, 1, &tuning, &mut Fixed(0));
        let baseline = crab.position.y;

        // Draw of 1 commits to a jump, effective next frame
        crab.advance(0.1, &tuning, &mut Fixed(1));
        assert_eq!(crab.jump().map(|j| j.phase), Some(JumpPhase::Rising));
        assert_eq!(crab.position.y, baseline);

        // 240 units/s up: 1.1s overshoots the 250 ceiling and clamps
        crab.advance(1.1, &tuning, &mut Fixed(0));
        let jump = *crab.jump().expect("jumper state");
        assert_eq!(jump.phase, JumpPhase::Falling);
        assert_eq!(jump.height, 250.0);
        assert_eq!(crab.position.y, baseline + 250.0);

        crab.advance(0.5, &tuning, &mut Fixed(0));
        assert_eq!(crab.jump().map(|j| j.height), Some(130.0));

        crab.advance(1.0, &tuning, &mut Fixed(0));
        let jump = *crab.jump().expect("jumper state");
        assert_eq!(jump.phase, JumpPhase::Grounded);
        assert_eq!(jump.height, 0.0);
        assert_eq!(crab.position.y, baseline);
    }

    #[test]
    fn test_jumper_no_flip_mid_air() {
        let tuning = Tuning::default();
        let mut crab = Creature::spawn(CreatureKind::Jumper, 1, &tuning, &mut Fixed(0));
        crab.advance(0.01, &tuning, &mut Fixed(1));
        let timer = crab.flip.timer;

        crab.advance(0.2, &tuning, &mut Fixed(0));
        crab.advance(0.2, &tuning, &mut Fixed(0));
        assert_eq!(crab.flip.timer, timer);
        assert_eq!(crab.flip.frame, Frame::A);
    }

    #[test]
    fn test_jumper_other_draws_stay_grounded() {
        let tuning = Tuning::default();
        let mut crab = Creature::spawn(CreatureKind::Jumper, 1, &tuning, &mut Fixed(0));
        for _ in 0..50 {
            crab.advance(0.016, &tuning, &mut Fixed(7));
        }
        assert_eq!(crab.jump().map(|j| j.phase), Some(JumpPhase::Grounded));
    }
}
