//! Session state
//!
//! Everything a restart throws away lives in [`World`]; the session keeps
//! the tuning and the random stream across restarts. Reset is just
//! "replace the world with a fresh one".

use serde::{Deserialize, Serialize};

use super::backdrop::BackdropScheduler;
use super::creature::{Creature, CreatureKind};
use super::player::Player;
use super::registry::EntityRegistry;
use super::rng::{RandomSource, SimRng};
use super::spawn::SpawnScheduler;
use crate::tuning::Tuning;

/// Game over prompt
pub const GAME_OVER_TEXT: &str = "You lost! Press Y to play again or ESC to exit";
/// Controls hint
pub const HELP_TEXT: &str = "Press UP to jump, LEFT to lower speed, ESC to exit";

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing
    #[default]
    Running,
    /// Frozen after a collision, waiting for restart or quit
    GameOver,
    /// Session ended
    Quit,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    TileLaunched { sprite: u32 },
    CreatureSpawned { id: u32, kind: CreatureKind },
    Collision { creature_id: u32 },
    CreaturesRemoved { count: usize },
    Restarted,
    Quit,
}

/// Resettable part of the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub phase: GamePhase,
    pub player: Player,
    pub registry: EntityRegistry,
    pub spawner: SpawnScheduler,
    pub backdrop: BackdropScheduler,
    /// Simulated seconds survived
    pub elapsed: f32,
    /// Ticks advanced while running
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl World {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Running,
            player: Player::new(tuning),
            registry: EntityRegistry::new(),
            spawner: SpawnScheduler::new(tuning.spawn_interval),
            backdrop: BackdropScheduler::default(),
            elapsed: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.registry.creatures
    }
}

/// A game session: tuning, random stream and the current world
#[derive(Debug, Clone)]
pub struct Session<R = SimRng> {
    pub tuning: Tuning,
    pub rng: R,
    pub world: World,
}

impl Session<SimRng> {
    /// Session driven by a seeded PCG stream
    pub fn seeded(seed: u64, tuning: Tuning) -> Self {
        Self::new(tuning, SimRng::new(seed))
    }
}

impl<R: RandomSource> Session<R> {
    pub fn new(tuning: Tuning, rng: R) -> Self {
        let world = World::new(&tuning);
        Self { tuning, rng, world }
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn is_over(&self) -> bool {
        self.world.phase == GamePhase::Quit
    }

    /// Back to session start: no creatures or tiles, zeroed timers, player
    /// at its anchor
    pub fn reset(&mut self) {
        self.world = World::new(&self.tuning);
    }

    /// Spawn a creature of `kind` at the right edge
    pub fn spawn_creature(&mut self, kind: CreatureKind) -> u32 {
        let id = self.world.next_entity_id();
        let creature = Creature::spawn(kind, id, &self.tuning, &mut self.rng);
        self.world.registry.creatures.push(creature);
        id
    }

    /// Status line shown at the bottom of the screen
    pub fn status_line(&self) -> String {
        match self.world.phase {
            GamePhase::GameOver => GAME_OVER_TEXT.to_string(),
            _ => format!("Running for: {:.2} seconds", self.world.elapsed),
        }
    }

    pub fn help_line(&self) -> &'static str {
        HELP_TEXT
    }
}
