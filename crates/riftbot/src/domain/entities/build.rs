//! Build Recommendation Entity
//!
//! The build service answers with several independently delimited hash
//! strings. They stay raw here; decoding happens in the build formatter so a
//! single bad section never takes the others down with it.

use serde::{Deserialize, Serialize};

/// Highest-winrate build for a champion in one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildPayload {
    /// The role the build was computed for, as the upstream reports it.
    pub role: String,
    /// Win rate of this build, in percent.
    pub win_rate: f64,
    pub hashes: BuildHashes,
}

/// Raw delimited hash strings, one per build section. `None` when the
/// upstream omitted the section entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildHashes {
    /// Starting items, `-`-delimited item IDs.
    pub first_items: Option<String>,
    /// Final items, `-`-delimited item IDs.
    pub final_items: Option<String>,
    /// Summoner spells, `-`-delimited spell IDs.
    pub summoner_spells: Option<String>,
    /// Runes, interleaved `id-count` pairs.
    pub runes: Option<String>,
    /// Masteries (talents), interleaved `id-count` pairs.
    pub masteries: Option<String>,
    /// Skill order tokens, e.g. `Q-W-E-Q`.
    pub skill_order: Option<String>,
}
