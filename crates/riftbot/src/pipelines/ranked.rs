//! Standings Pipeline
//!
//! summoner lookup, then one ranked-entries call keyed by the opaque ID.

use crate::domain::{CommandError, Outcome, ResolvedIdentity};
use crate::formatters;
use crate::pipelines::{player, Services};

pub async fn run(
    services: &Services,
    identity: ResolvedIdentity,
) -> Result<Outcome, CommandError> {
    let Some(summoner) = player::lookup(&*services.summoner, &identity).await? else {
        return Ok(Outcome::Empty("Summoner not found.".to_string()));
    };

    let entries = services.ranked.entries(identity.region, summoner.id).await?;
    let entries = match entries {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            return Ok(Outcome::Empty(format!(
                "No ranked data for {}",
                identity.player_name
            )))
        }
    };

    Ok(Outcome::Text(formatters::ranked::format(
        &entries,
        &identity.player_name,
    )))
}
