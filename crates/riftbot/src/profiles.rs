//! Caller Profiles
//!
//! Static, configuration-sourced map from chat caller ID to a default
//! identity. Loaded once at startup and read-only afterwards; presence in
//! this map doubles as the bot's allow-list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::Region;

/// A caller's configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerProfile {
    /// Home region used when a command names no region.
    pub region: Region,
    /// Default player name used when a command names no player.
    pub player_name: String,
    /// Whether this caller is mentioned in game announcements.
    #[serde(default)]
    pub game_invites: bool,
}

/// The full caller-ID to profile mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileMap {
    profiles: HashMap<String, CallerProfile>,
}

impl ProfileMap {
    pub fn new(profiles: HashMap<String, CallerProfile>) -> Self {
        Self { profiles }
    }

    /// Look a caller's profile up. `None` means the caller is not on the
    /// allow-list.
    pub fn get(&self, caller_id: &str) -> Option<&CallerProfile> {
        self.profiles.get(caller_id)
    }

    pub fn contains(&self, caller_id: &str) -> bool {
        self.profiles.contains_key(caller_id)
    }

    /// Iterate over `(caller_id, profile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CallerProfile)> {
        self.profiles.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
