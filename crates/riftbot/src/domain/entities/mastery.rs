//! Champion Mastery Entity

use serde::{Deserialize, Serialize};

/// One champion's mastery standing for a player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasteryEntry {
    pub champion_id: u32,
    pub champion_level: u32,
    pub champion_points: u64,
    /// Mastery tokens earned toward the next level. Only meaningful at
    /// levels 5 and 6.
    pub tokens_earned: u32,
}

impl MasteryEntry {
    /// Token progress fraction, shown only while tokens gate the next level:
    /// level 5 needs 2 tokens, level 6 needs 3.
    pub fn token_progress(&self) -> Option<String> {
        match self.champion_level {
            5 => Some(format!("{}/2", self.tokens_earned)),
            6 => Some(format!("{}/3", self.tokens_earned)),
            _ => None,
        }
    }
}
