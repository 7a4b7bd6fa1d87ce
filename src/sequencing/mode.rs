use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sequencing::duration::Duration;

/// Background music mode, one per level of game tension.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicMode {
    /// Slow pads and sparse bells for the title screen.
    Title,
    /// Four-on-the-floor groove with chords and an arpeggio.
    Normal,
    /// Fast drums and a chromatic warning line when time runs short.
    Hurry,
}

impl MusicMode {
    pub const ALL: [MusicMode; 3] = [MusicMode::Title, MusicMode::Normal, MusicMode::Hurry];

    /// Fixed tempo of the mode in quarter notes per minute.
    pub fn tempo_bpm(self) -> f64 {
        match self {
            MusicMode::Title => 60.0,
            MusicMode::Normal => 110.0,
            MusicMode::Hurry => 160.0,
        }
    }

    /// Seconds between two scheduled beats (one sixteenth note).
    pub fn beat_seconds(self) -> f64 {
        Duration::SIXTEENTH.to_seconds(self.tempo_bpm())
    }

    pub fn name(self) -> &'static str {
        match self {
            MusicMode::Title => "title",
            MusicMode::Normal => "normal",
            MusicMode::Hurry => "hurry",
        }
    }
}

impl fmt::Display for MusicMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
