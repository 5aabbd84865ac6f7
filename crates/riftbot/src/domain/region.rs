//! Region - the closed set of supported shards
//!
//! Each code maps to an upstream host and platform identifier. The mapping is
//! static configuration the pipelines depend on when building requests.

use serde::{Deserialize, Serialize};

/// A supported region shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Br,
    Eune,
    Euw,
    Jp,
    Kr,
    Lan,
    Las,
    Na,
    Oce,
    Tr,
    Ru,
    Pbe,
}

impl Region {
    /// All supported regions, in display order.
    pub const ALL: [Region; 12] = [
        Region::Br,
        Region::Eune,
        Region::Euw,
        Region::Jp,
        Region::Kr,
        Region::Lan,
        Region::Las,
        Region::Na,
        Region::Oce,
        Region::Tr,
        Region::Ru,
        Region::Pbe,
    ];

    /// Region used when the caller supplied only a player name.
    pub const DEFAULT: Region = Region::Eune;

    /// The region code as it appears in commands and API paths.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Br => "BR",
            Region::Eune => "EUNE",
            Region::Euw => "EUW",
            Region::Jp => "JP",
            Region::Kr => "KR",
            Region::Lan => "LAN",
            Region::Las => "LAS",
            Region::Na => "NA",
            Region::Oce => "OCE",
            Region::Tr => "TR",
            Region::Ru => "RU",
            Region::Pbe => "PBE",
        }
    }

    /// Platform identifier used by platform-scoped upstream endpoints.
    pub fn platform_id(&self) -> &'static str {
        match self {
            Region::Br => "BR1",
            Region::Eune => "EUN1",
            Region::Euw => "EUW1",
            Region::Jp => "JP1",
            Region::Kr => "KR",
            Region::Lan => "LA1",
            Region::Las => "LA2",
            Region::Na => "NA1",
            Region::Oce => "OC1",
            Region::Tr => "TR1",
            Region::Ru => "RU",
            Region::Pbe => "PBE1",
        }
    }

    /// Hostname of the regional API endpoint.
    pub fn host(&self) -> &'static str {
        match self {
            Region::Br => "br.api.riotgames.com",
            Region::Eune => "eune.api.riotgames.com",
            Region::Euw => "euw.api.riotgames.com",
            Region::Jp => "jp.api.riotgames.com",
            Region::Kr => "kr.api.riotgames.com",
            Region::Lan => "lan.api.riotgames.com",
            Region::Las => "las.api.riotgames.com",
            Region::Na => "na.api.riotgames.com",
            Region::Oce => "oce.api.riotgames.com",
            Region::Tr => "tr.api.riotgames.com",
            Region::Ru => "ru.api.riotgames.com",
            Region::Pbe => "pbe.api.riotgames.com",
        }
    }

    /// Comma-separated list of every valid code, for validation messages.
    pub fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(|r| r.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BR" => Ok(Region::Br),
            "EUNE" => Ok(Region::Eune),
            "EUW" => Ok(Region::Euw),
            "JP" => Ok(Region::Jp),
            "KR" => Ok(Region::Kr),
            "LAN" => Ok(Region::Lan),
            "LAS" => Ok(Region::Las),
            "NA" => Ok(Region::Na),
            "OCE" => Ok(Region::Oce),
            "TR" => Ok(Region::Tr),
            "RU" => Ok(Region::Ru),
            "PBE" => Ok(Region::Pbe),
            _ => Err(format!("Unknown region: {}", s)),
        }
    }
}
