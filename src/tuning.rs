//! Data-driven game balance
//!
//! [`Tuning`] mirrors every value in [`crate::consts`]. A partial JSON
//! document overrides just the keys it names; everything else keeps the
//! compile-time default, so `consts` stays the authoritative source.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Runtime-tunable balance values, one field per constant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub apples_amount_min: i32,
    pub apples_amount_max: i32,
    pub rocks_amount_min: i32,
    pub rocks_amount_max: i32,
    pub player_radius: f32,
    pub player_start_speed: f32,
    pub player_acceleration: f32,
    pub apple_radius: f32,
    pub rock_width: f32,
    pub rock_height: f32,
    pub restart_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            apples_amount_min: APPLES_AMOUNT_MIN,
            apples_amount_max: APPLES_AMOUNT_MAX,
            rocks_amount_min: ROCKS_AMOUNT_MIN,
            rocks_amount_max: ROCKS_AMOUNT_MAX,
            player_radius: PLAYER_RADIUS,
            player_start_speed: PLAYER_START_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            apple_radius: APPLE_RADIUS,
            rock_width: ROCK_WIDTH,
            rock_height: ROCK_HEIGHT,
            restart_delay: RESTART_DELAY,
        }
    }
}

impl Tuning {
    /// Apply overrides from a JSON document; missing keys keep defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
