//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - State mutation only inside `tick`
//! - No rendering or platform dependencies

pub mod collision;
pub mod random;
pub mod shapes;
pub mod state;
pub mod tick;

pub use collision::{
    circle_intersects_rect, circle_outside_bounds, circles_intersect, rects_intersect,
};
pub use random::{random_float, random_int, random_position};
pub use shapes::{Circle, Rect};
pub use state::{
    Apple, GameEvent, GamePhase, GameState, ModeConfig, ObjectiveMode, Player, Rock, RoundOutcome,
    SpeedMode,
};
pub use tick::{TickInput, generate_round, restart, tick};
