//! Ranked Standings Entity

use serde::{Deserialize, Serialize};

/// One queue's ranked standing for a player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Raw queue code, e.g. `RANKED_SOLO_5x5`.
    pub queue: String,
    /// Tier name, e.g. `GOLD`.
    pub tier: String,
    /// Rank division within the tier, e.g. `II`.
    pub division: String,
    /// League points in the current division.
    pub league_points: u32,
}

impl RankedEntry {
    /// Human label for the queue code. Known codes get a friendly name,
    /// everything else falls back to a generic label.
    pub fn queue_label(&self) -> &str {
        match self.queue.as_str() {
            "RANKED_SOLO_5x5" => "Solo/Duo",
            "RANKED_FLEX_SR" => "Flex 5v5",
            "RANKED_FLEX_TT" => "Flex 3v3",
            _ => "General",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_queue_labels() {
        let entry = |queue: &str| RankedEntry {
            queue: queue.to_string(),
            tier: "GOLD".to_string(),
            division: "II".to_string(),
            league_points: 45,
        };

        assert_eq!(entry("RANKED_SOLO_5x5").queue_label(), "Solo/Duo");
        assert_eq!(entry("RANKED_FLEX_SR").queue_label(), "Flex 5v5");
        assert_eq!(entry("RANKED_FLEX_TT").queue_label(), "Flex 3v3");
        assert_eq!(entry("RANKED_TEAM_5x5").queue_label(), "General");
    }
}
