//! Game state and entity types
//!
//! Everything a round owns lives in [`GameState`]; [`super::tick::tick`] is
//! the only place it gets mutated.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::shapes::{Circle, Rect};
use crate::direction_angle;
use crate::highscores::Scoreboard;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Mode selection, waiting for start input
    MainMenu,
    /// Active gameplay
    Playing,
    /// Best-score table
    Scoreboard,
    /// Round over, counting down to restart
    EndGame,
}

/// Win-condition variant, picked in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObjectiveMode {
    /// The round ends in a win once every apple is eaten
    #[default]
    Finite,
    /// Eaten apples respawn elsewhere; the round only ends on a crash
    Endless,
}

/// Speed progression variant, picked in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedMode {
    /// Player speed grows by a fixed increment per apple
    #[default]
    Accelerating,
    /// Player speed never changes mid-round
    Constant,
}

/// Selected game mode: one value from each pair, so contradictory flag
/// combinations are unrepresentable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModeConfig {
    pub objective: ObjectiveMode,
    pub speed: SpeedMode,
}

/// How the round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Every apple eaten in finite mode
    Win,
    /// Left the field or hit a rock
    Loss,
}

/// Fire-and-forget signals for the presentation shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Play the eat cue
    AppleEaten,
    /// Play the death cue
    PlayerDied,
    /// Player asked to leave mid-round; the shell should close
    QuitRequested,
}

/// The player's disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub collider: Circle,
    /// Visual facing angle (radians), kept from the last nonzero input
    pub heading: f32,
    /// Movement speed (pixels/sec)
    pub speed: f32,
}

impl Player {
    pub fn new(position: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            collider: Circle::new(position, radius),
            heading: 0.0,
            speed,
        }
    }

    /// Advance position along the held input direction.
    ///
    /// `dir` components are -1/0/1 per axis; diagonals are not normalized,
    /// so each held axis contributes full speed. `dt` is used as supplied -
    /// a stalled frame produces a proportionally large jump.
    pub fn integrate_movement(&mut self, dir: Vec2, dt: f32) {
        self.collider.center += dir * self.speed * dt;
    }

    /// Face the last nonzero input direction; holding nothing keeps the
    /// previous heading.
    pub fn rotate_to_heading(&mut self, dir: Vec2) {
        if dir != Vec2::ZERO {
            self.heading = direction_angle(dir);
        }
    }
}

/// A collectible apple
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Apple {
    pub collider: Circle,
    pub eaten: bool,
}

impl Apple {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            collider: Circle::new(position, radius),
            eaten: false,
        }
    }

    /// Remove the apple from play (finite mode)
    pub fn mark_eaten(&mut self) {
        self.eaten = true;
    }

    /// Move the apple somewhere else (endless mode)
    pub fn relocate(&mut self, position: Vec2) {
        self.collider.center = position;
    }
}

/// A static rock hazard; immutable once spawned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rock {
    collider: Rect,
}

impl Rock {
    pub fn new(collider: Rect) -> Self {
        Self { collider }
    }

    /// The rock's rectangle, for collision queries and rendering
    pub fn rect(&self) -> &Rect {
        &self.collider
    }
}

/// Complete game state, explicitly owned and threaded through `tick`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG for round generation and endless-mode respawns
    pub(crate) rng: Pcg32,
    /// Current screen
    pub phase: GamePhase,
    /// Selected mode flags
    pub mode: ModeConfig,
    /// Balance values for this run
    pub tuning: Tuning,
    /// Player preferences; survive restarts
    pub settings: Settings,
    /// Best scores; survive restarts, never cleared
    pub scores: Scoreboard,
    /// The player's disk
    pub player: Player,
    /// This round's apples
    pub apples: Vec<Apple>,
    /// This round's rocks
    pub rocks: Vec<Rock>,
    /// Apples eaten this round
    pub eaten_count: i32,
    /// HUD score text, refreshed on every collection
    pub score_label: String,
    /// Seconds left on the end screen before the round resets
    pub restart_time_left: f32,
    /// Guards the once-per-end-screen score recording
    pub(crate) score_recorded: bool,
    /// Cues for the shell, drained once per frame
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game at the main menu with a freshly generated round.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Same as [`GameState::new`] with balance overrides applied.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::MainMenu,
            mode: ModeConfig::default(),
            tuning,
            settings: Settings::default(),
            scores: Scoreboard::new(),
            player: Player::new(Vec2::ZERO, tuning.player_radius, 0.0),
            apples: Vec::new(),
            rocks: Vec::new(),
            eaten_count: 0,
            score_label: String::new(),
            restart_time_left: tuning.restart_delay,
            score_recorded: false,
            events: Vec::new(),
        };
        super::tick::generate_round(&mut state);
        state
    }

    /// Apples still in play, the set the shell draws.
    pub fn visible_apples(&self) -> impl Iterator<Item = &Apple> {
        self.apples.iter().filter(|a| !a.eaten)
    }

    /// Win iff every apple this round was eaten. In endless mode apples are
    /// never removed, so a crash there reads as a loss.
    pub fn outcome(&self) -> RoundOutcome {
        if self.eaten_count == self.apples.len() as i32 {
            RoundOutcome::Win
        } else {
            RoundOutcome::Loss
        }
    }

    /// Queue a signal for the shell.
    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Queue an audio cue; dropped entirely while muted.
    pub(crate) fn emit_cue(&mut self, cue: GameEvent) {
        if !self.settings.muted {
            self.events.push(cue);
        }
    }

    /// Take this frame's signals; the shell calls this once per iteration.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn movement_scales_with_speed_and_dt() {
        let mut player = Player::new(Vec2::new(100.0, 100.0), 20.0, 50.0);
        player.integrate_movement(Vec2::new(1.0, 0.0), 0.5);
        assert_eq!(player.collider.center, Vec2::new(125.0, 100.0));
    }

    #[test]
    fn opposite_keys_cancel_and_diagonals_keep_full_axis_speed() {
        let mut player = Player::new(Vec2::ZERO, 20.0, 100.0);
        player.integrate_movement(Vec2::ZERO, 1.0);
        assert_eq!(player.collider.center, Vec2::ZERO);

        // Both axes held: full speed on each, no normalization
        player.integrate_movement(Vec2::new(1.0, 1.0), 1.0);
        assert_eq!(player.collider.center, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn heading_follows_last_nonzero_direction() {
        let mut player = Player::new(Vec2::ZERO, 20.0, 100.0);
        player.rotate_to_heading(Vec2::new(0.0, 1.0));
        assert!((player.heading - FRAC_PI_2).abs() < 1e-6);

        // No input keeps the old heading
        player.rotate_to_heading(Vec2::ZERO);
        assert!((player.heading - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn apple_eat_and_relocate() {
        let mut apple = Apple::new(Vec2::new(10.0, 10.0), 10.0);
        assert!(!apple.eaten);
        apple.relocate(Vec2::new(50.0, 60.0));
        assert_eq!(apple.collider.center, Vec2::new(50.0, 60.0));
        apple.mark_eaten();
        assert!(apple.eaten);
    }

    #[test]
    fn default_mode_is_finite_accelerating() {
        let mode = ModeConfig::default();
        assert_eq!(mode.objective, ObjectiveMode::Finite);
        assert_eq!(mode.speed, SpeedMode::Accelerating);
    }

    #[test]
    fn new_state_starts_at_main_menu_with_a_round() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::MainMenu);
        assert_eq!(state.eaten_count, 0);
        assert!(!state.apples.is_empty());
        assert!(!state.rocks.is_empty());
    }

    #[test]
    fn muted_state_swallows_cues_but_not_signals() {
        let mut state = GameState::new(1);
        state.settings.muted = true;
        state.emit_cue(GameEvent::AppleEaten);
        state.push_event(GameEvent::QuitRequested);
        assert_eq!(state.drain_events(), vec![GameEvent::QuitRequested]);
        // Drained queue stays empty
        assert!(state.drain_events().is_empty());
    }
}
