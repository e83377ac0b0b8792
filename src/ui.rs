//! Text surface for the presentation shell
//!
//! The core decides what every label says; the shell renders these strings
//! verbatim. No layout, fonts, or colors here.

use crate::highscores::Scoreboard;
use crate::sim::{ModeConfig, ObjectiveMode, RoundOutcome, SpeedMode};

/// One menu row: display text plus whether it is the active choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    pub text: &'static str,
    pub selected: bool,
}

/// Mode-selection menu, top to bottom.
pub fn menu_lines(mode: &ModeConfig) -> Vec<MenuLine> {
    vec![
        MenuLine {
            text: "1. Finite game mode",
            selected: mode.objective == ObjectiveMode::Finite,
        },
        MenuLine {
            text: "2. Endless game mode",
            selected: mode.objective == ObjectiveMode::Endless,
        },
        MenuLine {
            text: "3. Acceleration game mode",
            selected: mode.speed == SpeedMode::Accelerating,
        },
        MenuLine {
            text: "4. Standard speed game mode",
            selected: mode.speed == SpeedMode::Constant,
        },
        MenuLine {
            text: "5. Scoreboard",
            selected: false,
        },
        MenuLine {
            text: "Enter - start game",
            selected: false,
        },
    ]
}

/// HUD score label.
pub fn score_line(eaten: i32) -> String {
    format!("Score: {eaten}")
}

/// Control help shown during play, toggled with the hint key.
pub fn hint_text() -> &'static str {
    "Use arrows to move.\nEat apples, don't touch borders and rocks.\nM toggles sound, H toggles this hint."
}

/// End screen message with the restart countdown.
pub fn end_message(outcome: RoundOutcome, restart_delay: f32) -> String {
    let verdict = match outcome {
        RoundOutcome::Win => "You win!",
        RoundOutcome::Loss => "You lose!",
    };
    format!("{verdict} The game restarts in {restart_delay:.0} seconds")
}

/// Scoreboard screen body: standings plus the return hint.
pub fn scoreboard_text(scores: &Scoreboard) -> String {
    let mut text = String::new();
    for row in scores.standings() {
        text.push_str(&row.name);
        text.push_str(" - ");
        text.push_str(&row.value.to_string());
        text.push('\n');
    }
    text.push_str("\nPress ESC to return to the main menu.");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_marks_exactly_one_choice_per_pair() {
        let mode = ModeConfig {
            objective: ObjectiveMode::Endless,
            speed: SpeedMode::Accelerating,
        };
        let lines = menu_lines(&mode);
        assert!(!lines[0].selected && lines[1].selected);
        assert!(lines[2].selected && !lines[3].selected);
    }

    #[test]
    fn score_line_formats_count() {
        assert_eq!(score_line(0), "Score: 0");
        assert_eq!(score_line(42), "Score: 42");
    }

    #[test]
    fn end_message_names_the_outcome() {
        assert!(end_message(RoundOutcome::Win, 4.0).starts_with("You win!"));
        assert!(end_message(RoundOutcome::Loss, 4.0).starts_with("You lose!"));
    }

    #[test]
    fn scoreboard_text_lists_standings_in_order() {
        let mut scores = Scoreboard::new();
        scores.record("A", 5);
        scores.record("B", 9);

        let text = scoreboard_text(&scores);
        let b = text.find("B - 9").expect("B listed");
        let a = text.find("A - 5").expect("A listed");
        assert!(b < a, "higher score listed first");
        assert!(text.ends_with("Press ESC to return to the main menu."));
    }
}
