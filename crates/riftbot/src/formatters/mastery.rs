//! Top Mastery Formatter

use crate::domain::{CatalogKind, MasteryEntry};
use crate::formatters::thousands;
use crate::staticdata::StaticDataHandle;

/// Render the top-mastery list. Champions missing from the catalog (e.g.
/// before bootstrap finishes) show their raw ID instead.
pub fn format(entries: &[MasteryEntry], player_name: &str, statics: &StaticDataHandle) -> String {
    let mut out = format!("*Top Mastery Champions - {}*\n", player_name);
    for (i, entry) in entries.iter().enumerate() {
        let name = statics
            .name_of(CatalogKind::Champions, entry.champion_id)
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("#{}", entry.champion_id));

        out.push_str(&format!(
            "{}. {} - {} Points, Level {}",
            i + 1,
            name,
            thousands(entry.champion_points),
            entry.champion_level
        ));
        if let Some(tokens) = entry.token_progress() {
            out.push(' ');
            out.push_str(&tokens);
        }
        out.push('\n');
    }
    out
}
