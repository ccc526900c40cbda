//! Platform abstraction layer
//!
//! The simulation needs four things from its host:
//! - a frame clock (seconds since the previous frame)
//! - discrete input events
//! - a draw sink for logical poses
//! - sprite sheet frame lookup
//!
//! `run` wires them to a `Session` and drives one tick per frame.

pub mod assets;
pub mod headless;

pub use assets::{AssetProvider, GridSheet, SheetAtlas, SpriteRect};
pub use headless::{Autopilot, FixedClock, PoseLog, ScriptedInput, WallClock};

use crate::sim::{GameEvent, GamePhase, Pose, RandomSource, Session, SheetId, TickInput, World, tick};

/// Source of per-frame time deltas
pub trait FrameClock {
    /// Seconds elapsed since the previous call
    fn delta(&mut self) -> f32;
}

/// Source of edge-triggered input
pub trait InputSource {
    /// Events since the previous poll. `world` is the state currently on screen.
    fn poll(&mut self, world: &World) -> TickInput;

    /// True once the window has been closed
    fn closed(&self) -> bool {
        false
    }
}

/// Receives one pose per visible entity per frame
pub trait DrawSink {
    fn draw(&mut self, pose: &Pose);

    /// Status and help text
    fn text(&mut self, _line: &str) {}

    /// End of frame
    fn present(&mut self) {}
}

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub game_overs: u32,
    pub restarts: u32,
    pub spawned: u32,
    /// Seconds survived in the last (or current) life
    pub elapsed: f32,
}

/// Drive `session` until it quits, the window closes or `max_frames` pass
pub fn run<R, C, I, D>(
    session: &mut Session<R>,
    clock: &mut C,
    input: &mut I,
    sink: &mut D,
    max_frames: u64,
) -> RunSummary
where
    R: RandomSource,
    C: FrameClock,
    I: InputSource,
    D: DrawSink,
{
    let mut summary = RunSummary::default();

    while !session.is_over() && summary.frames < max_frames {
        let dt = clock.delta();
        let mut frame_input = input.poll(&session.world);
        if input.closed() {
            frame_input.quit = true;
        }

        tick(session, &frame_input, dt);
        summary.frames += 1;

        for event in &session.world.events {
            match event {
                GameEvent::Collision { .. } => summary.game_overs += 1,
                GameEvent::Restarted => summary.restarts += 1,
                GameEvent::CreatureSpawned { .. } => summary.spawned += 1,
                _ => {}
            }
        }

        draw_frame(session, sink);
    }

    summary.elapsed = session.world.elapsed;
    log::info!(
        "Run finished after {} frames: {} game overs, {} restarts, {} spawns",
        summary.frames,
        summary.game_overs,
        summary.restarts,
        summary.spawned
    );
    summary
}

/// Hand the current world to the draw sink: backdrop, player, creatures, text
pub fn draw_frame<R: RandomSource>(session: &Session<R>, sink: &mut impl DrawSink) {
    let world = &session.world;
    for pose in world.registry.tiles.iter().map(|t| t.pose()) {
        sink.draw(&pose);
    }
    sink.draw(&world.player.pose());
    for pose in world.registry.creatures.iter().map(|c| c.pose()) {
        sink.draw(&pose);
    }
    if world.phase == GamePhase::GameOver {
        sink.draw(&Pose {
            position: world.player.position,
            sheet: SheetId::Boom,
            cell: 0,
        });
    }
    sink.text(&session.status_line());
    sink.text(session.help_line());
    sink.present();
}
