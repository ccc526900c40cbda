//! Simulation module
//!
//! All gameplay logic lives here, free of windowing, images and audio:
//! - Time only enters through `tick`'s `dt`
//! - Randomness only enters through a `RandomSource`
//! - Collections are updated and pruned within a single tick

pub mod anim;
pub mod backdrop;
pub mod collision;
pub mod creature;
pub mod player;
pub mod registry;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use anim::{FlipClock, Frame, Pose, SheetId};
pub use backdrop::{BackdropScheduler, BackdropTile};
pub use collision::{Aabb, first_hit};
pub use creature::{Behavior, Creature, CreatureKind, JumpPhase, JumpState};
pub use player::{Player, PlayerMotion};
pub use registry::{EntityRegistry, remove_indices};
pub use rng::{RandomSource, SimRng};
pub use spawn::SpawnScheduler;
pub use state::{GAME_OVER_TEXT, GameEvent, GamePhase, HELP_TEXT, Session, World};
pub use tick::{TickInput, sanitize_dt, tick};
