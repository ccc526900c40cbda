//! Per-frame simulation tick
//!
//! One call per rendered frame, with the wall-clock seconds since the
//! previous frame. Steps run in a fixed order: backdrop, player, spawning,
//! collision, creature motion, pruning.

use super::collision::first_hit;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, Session};

/// Edge-triggered input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump (UP)
    pub jump: bool,
    /// Duck / lower speed (LEFT)
    pub duck: bool,
    /// Play again after game over (Y)
    pub restart: bool,
    /// Leave the game (ESC or window closed)
    pub quit: bool,
}

/// Clamp a frame delta into the simulation's contract
///
/// Negative deltas become zero. A non-finite delta is a host bug.
pub fn sanitize_dt(dt: f32) -> f32 {
    debug_assert!(dt.is_finite(), "frame delta must be finite, got {dt}");
    if !dt.is_finite() {
        return 0.0;
    }
    if dt < 0.0 {
        log::warn!("Negative frame delta {dt} clamped to zero");
        return 0.0;
    }
    dt
}

/// Advance the session by one frame
pub fn tick<R: RandomSource>(session: &mut Session<R>, input: &TickInput, dt: f32) {
    session.world.events.clear();

    match session.world.phase {
        GamePhase::Quit => return,
        GamePhase::GameOver => {
            // Frozen: only restart or quit get through
            if input.restart {
                session.reset();
                session.world.events.push(GameEvent::Restarted);
                log::info!("Restarting session");
            } else if input.quit {
                session.world.phase = GamePhase::Quit;
                session.world.events.push(GameEvent::Quit);
                log::info!("Quit from game over screen");
            }
            return;
        }
        GamePhase::Running => {}
    }

    let Session { tuning, rng, world } = session;

    if input.quit {
        world.phase = GamePhase::Quit;
        world.events.push(GameEvent::Quit);
        log::info!("Quit after {:.2} seconds", world.elapsed);
        return;
    }

    let dt = sanitize_dt(dt);
    world.time_ticks += 1;
    world.elapsed += dt;

    // 1. Backdrop: launch on cadence, then scroll everything
    if let Some(tile) = world.backdrop.update(dt, tuning, rng) {
        log::debug!("Backdrop tile {} launched", tile.sprite);
        world.events.push(GameEvent::TileLaunched { sprite: tile.sprite });
        world.registry.tiles.push(tile);
    }
    let tile_exits = world.registry.advance_tiles(dt, tuning.backdrop_speed);

    // 2. Player
    if input.jump {
        world.player.request_jump();
    }
    if input.duck {
        world.player.request_duck();
    }
    world.player.advance(dt, tuning);

    // 3. Spawning
    if let Some(kind) = world.spawner.update(dt, rng) {
        let id = world.next_entity_id();
        world
            .registry
            .creatures
            .push(super::creature::Creature::spawn(kind, id, tuning, rng));
        log::debug!("Spawned {kind:?} #{id} at t={:.2}", world.elapsed);
        world.events.push(GameEvent::CreatureSpawned { id, kind });
    }

    // 4. Collision
    let player_box = world.player.bounds();
    if let Some(creature_id) = first_hit(&player_box, &world.registry.creatures).map(|c| c.id) {
        world.phase = GamePhase::GameOver;
        world.events.push(GameEvent::Collision { creature_id });
        log::info!(
            "Game over: hit creature #{creature_id} after {:.2} seconds",
            world.elapsed
        );
        return;
    }

    // 5. Creature motion
    let creature_exits = world.registry.advance_creatures(dt, tuning, rng);

    // 6. Pruning
    world.registry.prune(&creature_exits, &tile_exits);
    if !creature_exits.is_empty() {
        world.events.push(GameEvent::CreaturesRemoved {
            count: creature_exits.len(),
        });
    }
}
