//! Ranked Standings Formatter

use crate::domain::RankedEntry;

/// Render the per-queue standings list, Markdown flavored.
pub fn format(entries: &[RankedEntry], player_name: &str) -> String {
    let mut out = format!("*Ranked Standings - {}*\n", player_name);
    for entry in entries {
        out.push_str(&format!(
            "{} - {} {} ({} points)\n",
            entry.queue_label(),
            entry.tier,
            entry.division,
            entry.league_points
        ));
    }
    out
}
