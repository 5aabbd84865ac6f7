//! Server configuration
//!
//! The caller-profile map (the allow-list) comes from a TOML file; API keys
//! come from the environment. Both are read once at startup.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use riftbot::ProfileMap;

const DEFAULT_CONFIG_FILE: &str = "riftbot.toml";

/// File-sourced configuration.
///
/// ```toml
/// [users.HolyZuzik]
/// region = "EUNE"
/// player_name = "Wakafa"
/// game_invites = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub users: ProfileMap,
}

impl ServerConfig {
    /// Load from `RIFTBOT_CONFIG` or the default file next to the binary.
    pub fn load() -> Result<Self> {
        let path = std::env::var("RIFTBOT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config {:?}", path))
    }
}

/// API keys and transport settings, environment-sourced.
#[derive(Debug, Clone)]
pub struct Secrets {
    pub riot_api_key: String,
    pub championgg_api_key: String,
    pub twitch_client_id: String,
}

impl Secrets {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            riot_api_key: std::env::var("RIOT_API_KEY").context("RIOT_API_KEY is not set")?,
            championgg_api_key: std::env::var("CHAMPIONGG_API_KEY")
                .context("CHAMPIONGG_API_KEY is not set")?,
            twitch_client_id: std::env::var("TWITCH_CLIENT_ID")
                .context("TWITCH_CLIENT_ID is not set")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users_table() {
        let config: ServerConfig = toml::from_str(
            r#"
            [users.HolyZuzik]
            region = "EUNE"
            player_name = "Wakafa"
            game_invites = true
            "#,
        )
        .unwrap();

        let profile = config.users.get("HolyZuzik").expect("user should parse");
        assert_eq!(profile.player_name, "Wakafa");
        assert!(profile.game_invites);
    }

    #[test]
    fn test_game_invites_default_to_false() {
        let config: ServerConfig = toml::from_str(
            r#"
            [users.quiet]
            region = "NA"
            player_name = "Someone"
            "#,
        )
        .unwrap();

        assert!(!config.users.get("quiet").unwrap().game_invites);
    }
}
