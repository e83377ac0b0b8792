//! Player preferences
//!
//! Toggled from gameplay input; survive round restarts. Nothing here is
//! written to disk - preferences live for the process lifetime.

use serde::{Deserialize, Serialize};

/// Audio/help preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Drop audio cues entirely
    pub muted: bool,
    /// Show the control-hint text during play
    pub show_hint: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            show_hint: true,
        }
    }
}

impl Settings {
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_hint(&mut self) {
        self.show_hint = !self.show_hint;
    }
}
