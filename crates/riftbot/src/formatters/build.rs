//! Build Formatter
//!
//! Decodes the build service's delimited hash strings section by section.
//! Section failures are local: one undecodable hash drops that section and
//! the rest of the reply still renders. The pipeline treats "no section
//! decoded at all" as an upstream failure.

use tracing::warn;

use crate::domain::{BuildPayload, CatalogKind};
use crate::staticdata::StaticDataHandle;

/// Render the build, or `None` when not a single section decoded.
pub fn format(
    payload: &BuildPayload,
    champion_name: &str,
    statics: &StaticDataHandle,
) -> Option<String> {
    let sections = [
        (
            "Starting items",
            decode_ids(payload.hashes.first_items.as_deref(), CatalogKind::Items, statics),
        ),
        (
            "Final items",
            decode_ids(payload.hashes.final_items.as_deref(), CatalogKind::Items, statics),
        ),
        (
            "Summoner spells",
            decode_ids(
                payload.hashes.summoner_spells.as_deref(),
                CatalogKind::SummonerSpells,
                statics,
            ),
        ),
        (
            "Runes",
            decode_pairs(payload.hashes.runes.as_deref(), CatalogKind::Runes, statics),
        ),
        (
            "Masteries",
            decode_pairs(
                payload.hashes.masteries.as_deref(),
                CatalogKind::Masteries,
                statics,
            ),
        ),
        ("Skill order", decode_skill_order(payload.hashes.skill_order.as_deref())),
    ];

    let mut out = format!(
        "*{} - {} build* ({:.1}% win rate)\n",
        champion_name,
        role_label(&payload.role),
        payload.win_rate
    );

    let mut rendered = 0;
    for (label, decoded) in sections {
        match decoded {
            Ok(Some(text)) => {
                out.push_str(&format!("{}: {}\n", label, text));
                rendered += 1;
            }
            Ok(None) => {}
            Err(detail) => {
                warn!(section = label, detail = %detail, "dropping undecodable build section");
            }
        }
    }

    (rendered > 0).then_some(out)
}

fn role_label(role: &str) -> &str {
    match role {
        "TOP" => "Top",
        "JUNGLE" => "Jungle",
        "MIDDLE" => "Mid",
        "DUO_CARRY" => "ADC",
        "DUO_SUPPORT" => "Support",
        other => other,
    }
}

/// `Ok(None)` = section absent upstream; `Err` = present but undecodable.
type Section = Result<Option<String>, String>;

fn parse_ids(hash: &str) -> Result<Vec<u32>, String> {
    hash.split('-')
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| format!("'{}' is not a numeric ID", part))
        })
        .collect()
}

fn entry_name(statics: &StaticDataHandle, kind: CatalogKind, id: u32) -> String {
    // An unknown ID is a catalog miss, not a decode failure.
    statics
        .name_of(kind, id)
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("#{}", id))
}

fn decode_ids(hash: Option<&str>, kind: CatalogKind, statics: &StaticDataHandle) -> Section {
    let Some(hash) = hash else { return Ok(None) };
    let names: Vec<String> = parse_ids(hash)?
        .into_iter()
        .map(|id| entry_name(statics, kind, id))
        .collect();
    Ok(Some(names.join(", ")))
}

/// Interleaved `id-count` pairs, decoded two elements at a time.
fn decode_pairs(hash: Option<&str>, kind: CatalogKind, statics: &StaticDataHandle) -> Section {
    let Some(hash) = hash else { return Ok(None) };
    let ids = parse_ids(hash)?;
    if ids.len() % 2 != 0 {
        return Err(format!("odd element count {}", ids.len()));
    }
    let parts: Vec<String> = ids
        .chunks_exact(2)
        .map(|pair| format!("{}x {}", pair[1], entry_name(statics, kind, pair[0])))
        .collect();
    Ok(Some(parts.join(", ")))
}

fn decode_skill_order(hash: Option<&str>) -> Section {
    let Some(hash) = hash else { return Ok(None) };
    if hash.is_empty() {
        return Err("empty skill order".to_string());
    }
    Ok(Some(hash.split('-').collect::<Vec<_>>().join(" > ")))
}
