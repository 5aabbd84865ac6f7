//! Reference Catalog Entities
//!
//! Five independent ID-to-name catalogs share one entry shape. They are
//! populated once at startup and read-only afterwards.

use serde::{Deserialize, Serialize};

/// Which of the five reference catalogs a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Champions,
    Items,
    /// Talent trees (masteries).
    Masteries,
    Runes,
    /// Special abilities (summoner spells).
    SummonerSpells,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 5] = [
        CatalogKind::Champions,
        CatalogKind::Items,
        CatalogKind::Masteries,
        CatalogKind::Runes,
        CatalogKind::SummonerSpells,
    ];

    /// Catalog name as it appears in API paths and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Champions => "champion",
            CatalogKind::Items => "item",
            CatalogKind::Masteries => "mastery",
            CatalogKind::Runes => "rune",
            CatalogKind::SummonerSpells => "summoner-spell",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    /// Display name, e.g. "Aurelion Sol".
    pub name: String,
    /// Catalog-specific short code, e.g. "AurelionSol".
    pub key: String,
}
