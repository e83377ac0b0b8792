//! Per-frame simulation tick
//!
//! Advances the four-screen state machine and runs the collision and scoring
//! pass for the active round.

use glam::Vec2;

use super::collision::{circle_intersects_rect, circle_outside_bounds, circles_intersect};
use super::random::{random_int, random_position};
use super::shapes::Rect;
use super::state::{
    Apple, GameEvent, GamePhase, GameState, ObjectiveMode, Player, Rock, SpeedMode,
};
use crate::highscores::PLAYER_NAME;
use crate::ui;

/// Input snapshot for a single tick
///
/// Movement booleans mirror keys held this frame. Everything else is a
/// one-shot command: the shell sets it on key-press and clears it after the
/// tick consumes it, so a held key cannot fire twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held: move up
    pub up: bool,
    /// Held: move down
    pub down: bool,
    /// Held: move left
    pub left: bool,
    /// Held: move right
    pub right: bool,
    /// Start the round from the menu
    pub confirm: bool,
    /// Back out: quits mid-round, leaves the scoreboard
    pub cancel: bool,
    /// Menu: finite objective
    pub select_finite: bool,
    /// Menu: endless objective
    pub select_endless: bool,
    /// Menu: accelerating speed
    pub select_accelerating: bool,
    /// Menu: constant speed
    pub select_constant: bool,
    /// Menu: open the scoreboard
    pub view_scores: bool,
    /// Toggle audio cues
    pub toggle_mute: bool,
    /// Toggle the hint text
    pub toggle_hint: bool,
}

impl TickInput {
    /// Movement direction from held keys: opposite keys cancel, diagonals
    /// keep full per-axis magnitude.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(
            (self.right as i32 - self.left as i32) as f32,
            (self.down as i32 - self.up as i32) as f32,
        )
    }
}

/// Advance the game by one tick.
///
/// `dt` is wall-clock seconds since the previous tick, used as supplied with
/// no upper clamp: after a long stall the player covers the whole gap in one
/// step.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::MainMenu => update_main_menu(state, input),
        GamePhase::Scoreboard => update_scoreboard(state, input),
        GamePhase::Playing => update_playing(state, input, dt),
        GamePhase::EndGame => update_end_game(state, dt),
    }
}

fn update_main_menu(state: &mut GameState, input: &TickInput) {
    if input.select_finite {
        state.mode.objective = ObjectiveMode::Finite;
    }
    if input.select_endless {
        state.mode.objective = ObjectiveMode::Endless;
    }
    if input.select_accelerating {
        state.mode.speed = SpeedMode::Accelerating;
    }
    if input.select_constant {
        state.mode.speed = SpeedMode::Constant;
    }

    if input.view_scores {
        state.phase = GamePhase::Scoreboard;
        return;
    }

    if input.confirm {
        generate_round(state);
        state.phase = GamePhase::Playing;
        log::info!(
            "round started: {:?}/{:?}, {} apples, {} rocks",
            state.mode.objective,
            state.mode.speed,
            state.apples.len(),
            state.rocks.len()
        );
    }
}

fn update_scoreboard(state: &mut GameState, input: &TickInput) {
    if input.cancel {
        state.phase = GamePhase::MainMenu;
    }
}

fn update_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.cancel {
        state.push_event(GameEvent::QuitRequested);
        return;
    }
    if input.toggle_mute {
        state.settings.toggle_mute();
    }
    if input.toggle_hint {
        state.settings.toggle_hint();
    }

    let dir = input.direction();
    state.player.integrate_movement(dir, dt);
    state.player.rotate_to_heading(dir);

    if check_player_collisions(state) {
        state.phase = GamePhase::EndGame;
        state.restart_time_left = state.tuning.restart_delay;
        log::info!("round over: {:?}, score {}", state.outcome(), state.eaten_count);
    }
}

fn update_end_game(state: &mut GameState, dt: f32) {
    state.restart_time_left -= dt;

    if !state.score_recorded {
        state.scores.record(PLAYER_NAME, state.eaten_count);
        state.score_recorded = true;
        log::debug!("recorded player score {}", state.eaten_count);
    }

    if state.restart_time_left <= 0.0 {
        restart(state);
    }
}

/// Collision and scoring pass for one Playing tick.
///
/// Fixed order: field bounds first, then apples, then rocks. The first
/// terminating condition wins; at most one surfaces per tick.
fn check_player_collisions(state: &mut GameState) -> bool {
    if circle_outside_bounds(
        &state.player.collider,
        state.tuning.screen_width,
        state.tuning.screen_height,
    ) {
        state.emit_cue(GameEvent::PlayerDied);
        return true;
    }

    for i in 0..state.apples.len() {
        if state.apples[i].eaten {
            continue;
        }
        if circles_intersect(&state.player.collider, &state.apples[i].collider) {
            on_apple_collected(state, i);

            if state.mode.objective == ObjectiveMode::Finite
                && state.eaten_count == state.apples.len() as i32
            {
                return true;
            }
        }
    }

    let crashed = state
        .rocks
        .iter()
        .any(|rock| circle_intersects_rect(&state.player.collider, rock.rect()));
    if crashed {
        state.emit_cue(GameEvent::PlayerDied);
        return true;
    }

    false
}

/// Reaction to the player touching a live apple.
fn on_apple_collected(state: &mut GameState, index: usize) {
    match state.mode.objective {
        ObjectiveMode::Endless => {
            let pos = random_position(
                &mut state.rng,
                state.tuning.screen_width,
                state.tuning.screen_height,
            );
            state.apples[index].relocate(pos);
        }
        ObjectiveMode::Finite => state.apples[index].mark_eaten(),
    }

    state.eaten_count += 1;
    state.score_label = ui::score_line(state.eaten_count);

    if state.mode.speed == SpeedMode::Accelerating {
        state.player.speed += state.tuning.player_acceleration;
    }

    state.emit_cue(GameEvent::AppleEaten);
}

/// Build a fresh round: player at field center, apples and rocks at random
/// positions, counts drawn from the configured ranges.
///
/// Leaves `phase` untouched; callers decide which screen follows.
pub fn generate_round(state: &mut GameState) {
    let apples_amount = random_int(
        &mut state.rng,
        state.tuning.apples_amount_min,
        state.tuning.apples_amount_max,
    );
    let rocks_amount = random_int(
        &mut state.rng,
        state.tuning.rocks_amount_min,
        state.tuning.rocks_amount_max,
    );

    let (w, h) = (state.tuning.screen_width, state.tuning.screen_height);
    state.player = Player::new(
        Vec2::new(w / 2.0, h / 2.0),
        state.tuning.player_radius,
        state.tuning.player_start_speed,
    );

    state.apples = (0..apples_amount)
        .map(|_| Apple::new(random_position(&mut state.rng, w, h), state.tuning.apple_radius))
        .collect();

    let rock_size = Vec2::new(state.tuning.rock_width, state.tuning.rock_height);
    state.rocks = (0..rocks_amount)
        .map(|_| Rock::new(Rect::new(random_position(&mut state.rng, w, h), rock_size)))
        .collect();

    if state.scores.is_empty() {
        state.scores.seed_bots(apples_amount);
    }

    state.eaten_count = 0;
    state.score_label = ui::score_line(0);

    log::debug!("round generated: {apples_amount} apples, {rocks_amount} rocks");
}

/// Tear the round down and return to the menu.
///
/// Scores and settings survive; per-round bookkeeping (eaten count, restart
/// timer, the recorded-score guard) resets.
pub fn restart(state: &mut GameState) {
    generate_round(state);
    state.restart_time_left = state.tuning.restart_delay;
    state.score_recorded = false;
    state.phase = GamePhase::MainMenu;
}
