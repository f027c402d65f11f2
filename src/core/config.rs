//! Game configuration.
//!
//! A `GameConfig` carries the default grid and every timing knob. The
//! frontend's menu choices map onto it through [`Difficulty`] and
//! [`GridPreset`].

use serde::{Deserialize, Serialize};

/// Difficulty presets, mapped to how long the initial reveal lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Seconds all cards stay revealed at game start.
    pub fn reveal_secs(&self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 0.5,
        }
    }

    /// All presets, in menu order.
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

/// Grid size presets offered by the menu.
///
/// `3x3` is deliberately odd; the engine normalizes it to 3×2 with a
/// warning, same as any other odd request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridPreset {
    TwoByTwo,
    ThreeByThree,
    FourByFour,
    FiveBySix,
}

impl GridPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            GridPreset::TwoByTwo => "2x2",
            GridPreset::ThreeByThree => "3x3",
            GridPreset::FourByFour => "4x4",
            GridPreset::FiveBySix => "5x6",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "2x2" => Some(GridPreset::TwoByTwo),
            "3x3" => Some(GridPreset::ThreeByThree),
            "4x4" => Some(GridPreset::FourByFour),
            "5x6" => Some(GridPreset::FiveBySix),
            _ => None,
        }
    }

    /// `(rows, cols)` before normalization.
    pub fn dims(&self) -> (usize, usize) {
        match self {
            GridPreset::TwoByTwo => (2, 2),
            GridPreset::ThreeByThree => (3, 3),
            GridPreset::FourByFour => (4, 4),
            GridPreset::FiveBySix => (5, 6),
        }
    }

    /// All presets, in menu order.
    pub fn all() -> [GridPreset; 4] {
        [
            GridPreset::TwoByTwo,
            GridPreset::ThreeByThree,
            GridPreset::FourByFour,
            GridPreset::FiveBySix,
        ]
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Default grid rows.
    pub rows: usize,

    /// Default grid columns.
    pub cols: usize,

    /// Card flip animation length in seconds.
    pub flip_secs: f32,

    /// Initial all-cards-revealed preview length in seconds.
    pub reveal_secs: f32,

    /// Delay before two mismatched cards flip back, in seconds.
    pub mismatch_delay_secs: f32,

    /// Flip sound clip length in seconds; the pitch reset fires at half of
    /// this.
    pub flip_cue_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 2,
            cols: 3,
            flip_secs: 0.28,
            reveal_secs: Difficulty::Easy.reveal_secs(),
            mismatch_delay_secs: 0.5,
            flip_cue_secs: 0.3,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default grid dimensions.
    #[must_use]
    pub fn with_grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Apply a difficulty preset.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.reveal_secs = difficulty.reveal_secs();
        self
    }

    /// Set the mismatch reversal delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, secs: f32) -> Self {
        self.mismatch_delay_secs = secs;
        self
    }
}
