//! Best-score table shown on the scoreboard screen
//!
//! One entry per name, keyed map semantics: recording keeps the best of the
//! old and new value. Scores live in memory for the process lifetime and
//! survive round restarts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name under which the human player's best score is recorded
pub const PLAYER_NAME: &str = "Player";

/// Bot opponents seeding a fresh table
const BOT_NAMES: [&str; 4] = ["Boar", "Magpie", "Hedgehog", "Wasp"];

/// One display row of the scoreboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub value: i32,
}

/// Best score per player/bot name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    entries: HashMap<String, i32>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record `value` for `name`, keeping the best of old and new.
    pub fn record(&mut self, name: &str, value: i32) {
        let best = self.entries.entry(name.to_string()).or_insert(value);
        *best = (*best).max(value);
    }

    /// Best score recorded for `name`, if any.
    pub fn best(&self, name: &str) -> Option<i32> {
        self.entries.get(name).copied()
    }

    /// Seed the table with bot opponents scaled to the round size: the top
    /// bot matches a perfect finite round, the rest trail at 1/2, 1/3, 1/4.
    pub fn seed_bots(&mut self, apple_count: i32) {
        for (i, name) in BOT_NAMES.iter().enumerate() {
            self.record(name, apple_count / (i as i32 + 1));
        }
    }

    /// Rows sorted by score descending; ties break by name so the order is
    /// stable run to run.
    pub fn standings(&self) -> Vec<ScoreEntry> {
        let mut rows: Vec<ScoreEntry> = self
            .entries
            .iter()
            .map(|(name, &value)| ScoreEntry { name: name.clone(), value })
            .collect();
        rows.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_the_maximum() {
        let mut scores = Scoreboard::new();
        scores.record("A", 5);
        scores.record("B", 3);
        scores.record(PLAYER_NAME, 0);

        scores.record(PLAYER_NAME, 7);
        assert_eq!(scores.best(PLAYER_NAME), Some(7));

        // A later, lower run never shrinks the entry
        scores.record(PLAYER_NAME, 2);
        assert_eq!(scores.best(PLAYER_NAME), Some(7));
    }

    #[test]
    fn names_are_unique_keys() {
        let mut scores = Scoreboard::new();
        scores.record("A", 1);
        scores.record("A", 4);
        assert_eq!(scores.standings().len(), 1);
        assert_eq!(scores.best("A"), Some(4));
    }

    #[test]
    fn standings_sort_descending_with_stable_ties() {
        let mut scores = Scoreboard::new();
        scores.record("Zeta", 3);
        scores.record("Alpha", 3);
        scores.record("Mid", 5);

        let rows = scores.standings();
        assert_eq!(rows[0].name, "Mid");
        assert_eq!(rows[1].name, "Alpha");
        assert_eq!(rows[2].name, "Zeta");
    }

    #[test]
    fn seeded_bots_scale_with_round_size() {
        let mut scores = Scoreboard::new();
        scores.seed_bots(40);

        let rows = scores.standings();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].value, 40);
        assert_eq!(rows[1].value, 20);
        assert_eq!(rows[2].value, 13);
        assert_eq!(rows[3].value, 10);
    }
}
