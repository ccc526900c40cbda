//! Windowless collaborators for demos, replays and tests

use std::collections::VecDeque;
use std::time::Instant;

use super::{DrawSink, FrameClock, InputSource};
use crate::sim::{CreatureKind, GamePhase, Pose, TickInput, World};

/// Same delta every frame
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl FrameClock for FixedClock {
    fn delta(&mut self) -> f32 {
        self.dt
    }
}

/// Real elapsed time between calls
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    last: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl FrameClock for WallClock {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Replays a fixed list of per-frame inputs, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
    polls: u64,
    close_after: Option<u64>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Report the window closed once `polls` frames have been polled
    pub fn close_after(&mut self, polls: u64) {
        self.close_after = Some(polls);
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _world: &World) -> TickInput {
        self.polls += 1;
        self.frames.pop_front().unwrap_or_default()
    }

    fn closed(&self) -> bool {
        self.close_after.is_some_and(|limit| self.polls > limit)
    }
}

/// Plays the game: jumps over grounded creatures as they close in and
/// restarts a limited number of times after losing
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Gap between the player's front edge and a creature's back edge that
    /// triggers a jump
    pub lookahead: f32,
    pub restarts_left: u32,
}

impl Autopilot {
    pub fn new(restarts: u32) -> Self {
        Self {
            lookahead: 40.0,
            restarts_left: restarts,
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, world: &World) -> TickInput {
        match world.phase {
            GamePhase::GameOver => {
                if self.restarts_left > 0 {
                    self.restarts_left -= 1;
                    TickInput {
                        restart: true,
                        ..TickInput::default()
                    }
                } else {
                    TickInput {
                        quit: true,
                        ..TickInput::default()
                    }
                }
            }
            GamePhase::Quit => TickInput::default(),
            GamePhase::Running => {
                let player = &world.player;
                let front = player.position.x + player.width / 2.0;
                let threat = world.creatures().iter().any(|creature| {
                    let back = creature.position.x - creature.width / 2.0;
                    let gap = back - front;
                    creature.kind() != CreatureKind::Floater && (0.0..=self.lookahead).contains(&gap)
                });
                TickInput {
                    jump: threat,
                    ..TickInput::default()
                }
            }
        }
    }
}

/// Records the poses of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct PoseLog {
    pub frames: u64,
    pub last_frame: Vec<Pose>,
    pub last_text: Vec<String>,
    current: Vec<Pose>,
    text: Vec<String>,
}

impl DrawSink for PoseLog {
    fn draw(&mut self, pose: &Pose) {
        log::trace!("draw {:?} cell {} at {}", pose.sheet, pose.cell, pose.position);
        self.current.push(*pose);
    }

    fn text(&mut self, line: &str) {
        self.text.push(line.to_string());
    }

    fn present(&mut self) {
        self.frames += 1;
        self.last_frame = std::mem::take(&mut self.current);
        self.last_text = std::mem::take(&mut self.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Creature, Session};
    use crate::tuning::Tuning;

    #[test]
    fn test_wall_clock_is_monotonic() {
        let mut clock = WallClock::default();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let first = clock.delta();
        assert!(first > 0.0);
        assert!(clock.delta() >= 0.0);
    }

    #[test]
    fn test_scripted_input_replays_then_idles() {
        let world = World::new(&Tuning::default());
        let jump = TickInput {
            jump: true,
            ..TickInput::default()
        };
        let mut input = ScriptedInput::new([jump]);
        assert_eq!(input.poll(&world), jump);
        assert_eq!(input.poll(&world), TickInput::default());
        assert!(!input.closed());
    }

    #[test]
    fn test_autopilot_jumps_at_close_runner() {
        let tuning = Tuning::default();
        let mut session = Session::seeded(5, tuning.clone());
        let id = session.world.next_entity_id();
        let mut runner = Creature::spawn(CreatureKind::RunnerLow, id, &tuning, &mut session.rng);
        // Player front edge at 230, runner back edge at 250
        runner.position.x = 310.0;
        session.world.registry.creatures.push(runner);

        let mut pilot = Autopilot::new(0);
        assert!(pilot.poll(&session.world).jump);

        session.world.registry.creatures[0].position.x = 600.0;
        assert!(!pilot.poll(&session.world).jump);
    }

    #[test]
    fn test_autopilot_restarts_then_quits() {
        let mut world = World::new(&Tuning::default());
        world.phase = GamePhase::GameOver;
        let mut pilot = Autopilot::new(1);
        assert!(pilot.poll(&world).restart);
        assert!(pilot.poll(&world).quit);
    }
}
