//! Apple Dash - a bounded-arena arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `highscores`: Best-score table shown on the scoreboard screen
//! - `settings`: Player preferences (mute, hint visibility)
//! - `tuning`: Data-driven game balance
//! - `ui`: Text the presentation shell renders verbatim

pub mod highscores;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::Scoreboard;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playing field dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Apples spawned per round (inclusive range)
    pub const APPLES_AMOUNT_MIN: i32 = 40;
    pub const APPLES_AMOUNT_MAX: i32 = 80;
    /// Rocks spawned per round (inclusive range)
    pub const ROCKS_AMOUNT_MIN: i32 = 4;
    pub const ROCKS_AMOUNT_MAX: i32 = 10;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_START_SPEED: f32 = 100.0;
    /// Speed gained per apple in acceleration mode
    pub const PLAYER_ACCELERATION: f32 = 10.0;

    /// Apple collider radius
    pub const APPLE_RADIUS: f32 = 10.0;

    /// Rock rectangle size
    pub const ROCK_WIDTH: f32 = 30.0;
    pub const ROCK_HEIGHT: f32 = 20.0;

    /// Seconds the end screen stays up before the round resets
    pub const RESTART_DELAY: f32 = 4.0;
}

/// Facing angle (radians) for a movement direction.
///
/// Screen coordinates: x grows right, y grows down, so 0 faces right and
/// positive angles turn clockwise on screen.
#[inline]
pub fn direction_angle(dir: Vec2) -> f32 {
    dir.y.atan2(dir.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn direction_angle_axes() {
        assert_eq!(direction_angle(Vec2::new(1.0, 0.0)), 0.0);
        assert!((direction_angle(Vec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((direction_angle(Vec2::new(-1.0, 0.0)).abs() - PI).abs() < 1e-6);
    }
}
