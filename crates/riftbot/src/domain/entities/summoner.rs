//! Summoner Entity
//!
//! The opaque identity record the player-identity service returns for a
//! normalized name. Scoped to a single pipeline invocation; never cached.

use serde::{Deserialize, Serialize};

/// Upstream-assigned identifiers for a named player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summoner {
    /// Summoner ID, the key for ranked and mastery lookups.
    pub id: i64,
    /// Account ID, the key for match-history lookups.
    pub account_id: i64,
    /// The display name the record was obtained with.
    pub name: String,
}
