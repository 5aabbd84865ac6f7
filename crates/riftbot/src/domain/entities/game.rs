//! Match Record Entity
//!
//! A fully fetched match. The adapter joins the wire format's participant and
//! identity lists so every participant carries the display name it played
//! under; the recent-game formatter matches on that name.

use serde::{Deserialize, Serialize};

/// A finished match as returned by the match-detail service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Base game mode, e.g. `CLASSIC` or `ARAM`.
    pub game_mode: String,
    /// Queue code within the mode, e.g. `RANKED_SOLO_5x5`. Empty when the
    /// upstream did not distinguish one.
    pub queue: String,
    /// Match length in seconds.
    pub duration_secs: u64,
    pub participants: Vec<Participant>,
}

impl MatchRecord {
    /// Human label for the mode. `CLASSIC` matches get their queue spelled
    /// out; anything else shows the raw mode name.
    pub fn mode_label(&self) -> String {
        if self.game_mode != "CLASSIC" {
            return self.game_mode.clone();
        }
        match self.queue.as_str() {
            "RANKED_SOLO_5x5" => "Ranked Solo/Duo".to_string(),
            "RANKED_FLEX_SR" => "Ranked Flex 5v5".to_string(),
            "RANKED_FLEX_TT" => "Ranked Flex 3v3".to_string(),
            _ => self.queue.clone(),
        }
    }
}

/// One player's slot in a match, stats flattened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// In-match display name, as the identity service knew it.
    pub summoner_name: String,
    pub champion_id: u32,
    pub win: bool,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub minions_killed: u32,
    #[serde(default)]
    pub neutral_minions_killed: u32,
    #[serde(default)]
    pub gold_earned: u64,
    #[serde(default)]
    pub damage_to_champions: u64,
}

impl Participant {
    /// Lane plus jungle creeps combined.
    pub fn creep_score(&self) -> u32 {
        self.minions_killed + self.neutral_minions_killed
    }
}
