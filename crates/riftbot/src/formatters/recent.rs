//! Recent Game Formatter

use crate::domain::{CatalogKind, MatchRecord, Participant};
use crate::formatters::thousands;
use crate::staticdata::StaticDataHandle;

/// Render one participant's performance in a match.
pub fn format(
    record: &MatchRecord,
    participant: &Participant,
    player_name: &str,
    statics: &StaticDataHandle,
) -> String {
    let minutes = record.duration_secs % 3600 / 60;
    let seconds = record.duration_secs % 60;

    let champion = statics
        .name_of(CatalogKind::Champions, participant.champion_id)
        .map(|n| n.to_string())
        .unwrap_or_else(|| format!("#{}", participant.champion_id));

    let mut out = format!("*Recent Game - {}*\n", player_name);
    out.push_str(if participant.win {
        "VICTORY - "
    } else {
        "DEFEAT - "
    });
    out.push_str(&format!(
        "{} ({}:{:02})\n",
        record.mode_label(),
        minutes,
        seconds
    ));
    out.push_str(&format!(
        "{}/{}/{} as {}\n",
        participant.kills, participant.deaths, participant.assists, champion
    ));
    out.push_str(&format!(
        "CS: {}, Gold: {}\n",
        participant.creep_score(),
        thousands(participant.gold_earned)
    ));
    out.push_str(&format!(
        "Total damage done: {}",
        thousands(participant.damage_to_champions)
    ));
    out
}
