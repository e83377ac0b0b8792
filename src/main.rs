//! Apple Dash entry point
//!
//! Headless demo driver: scripts a short session against the simulation core
//! and logs the signals a presentation shell would turn into audio cues and
//! screen updates.

use apple_dash::sim::{GamePhase, GameState, TickInput, tick};
use apple_dash::ui;

const DEMO_SEED: u64 = 0xA991E5;
const DEMO_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Apple Dash (headless demo) starting...");

    let mut state = GameState::new(DEMO_SEED);

    for line in ui::menu_lines(&state.mode) {
        let marker = if line.selected { "  [selected]" } else { "" };
        log::info!("menu: {}{marker}", line.text);
    }

    // Start a round, then hold the right arrow until something ends it
    tick(
        &mut state,
        &TickInput { confirm: true, ..TickInput::default() },
        DEMO_DT,
    );

    let input = TickInput { right: true, ..TickInput::default() };
    let mut frames = 0u32;
    while state.phase == GamePhase::Playing && frames < 10_000 {
        tick(&mut state, &input, DEMO_DT);
        for event in state.drain_events() {
            log::info!("event: {event:?}");
        }
        frames += 1;
    }

    log::info!(
        "round over after {frames} frames, score {}: {}",
        state.eaten_count,
        ui::end_message(state.outcome(), state.tuning.restart_delay)
    );

    // One end-screen tick records the score before we print the table
    tick(&mut state, &TickInput::default(), DEMO_DT);
    log::info!("scoreboard:\n{}", ui::scoreboard_text(&state.scores));
}
