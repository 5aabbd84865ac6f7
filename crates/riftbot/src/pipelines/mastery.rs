//! Top-Mastery Pipeline

use crate::domain::{CommandError, Outcome, ResolvedIdentity};
use crate::formatters;
use crate::pipelines::{player, Services};
use crate::staticdata::StaticDataHandle;

/// How many champions to show when the caller does not say otherwise.
pub const DEFAULT_COUNT: u32 = 5;

pub async fn run(
    services: &Services,
    statics: &StaticDataHandle,
    identity: ResolvedIdentity,
) -> Result<Outcome, CommandError> {
    let Some(summoner) = player::lookup(&*services.summoner, &identity).await? else {
        return Ok(Outcome::Empty("Summoner not found.".to_string()));
    };

    let entries = services
        .mastery
        .top_champions(identity.region, summoner.id, DEFAULT_COUNT)
        .await?;
    let entries = match entries {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            return Ok(Outcome::Empty(format!(
                "No data for {}",
                identity.player_name
            )))
        }
    };

    Ok(Outcome::Text(formatters::mastery::format(
        &entries,
        &identity.player_name,
        statics,
    )))
}
