//! Recent-Match Pipeline
//!
//! Two sequential dependent calls: the latest match ID from the history
//! summary, then the full record by that ID. The target player is located
//! inside the record by normalized display name; "no match history" and
//! "player missing from the record" are distinct empty outcomes.

use crate::domain::{CommandError, Outcome, ResolvedIdentity, UpstreamError};
use crate::formatters;
use crate::pipelines::{player, Services};
use crate::staticdata::StaticDataHandle;

pub async fn run(
    services: &Services,
    statics: &StaticDataHandle,
    identity: ResolvedIdentity,
) -> Result<Outcome, CommandError> {
    let Some(summoner) = player::lookup(&*services.summoner, &identity).await? else {
        return Ok(Outcome::Empty("Summoner not found.".to_string()));
    };

    let Some(match_id) = services
        .matches
        .latest_match_id(identity.region, summoner.account_id)
        .await?
    else {
        return Ok(Outcome::Empty(format!(
            "No recent games for {}",
            identity.player_name
        )));
    };

    // A summary pointing at a record that is gone is an upstream
    // inconsistency, not a normal empty result.
    let record = services
        .matches
        .match_by_id(identity.region, match_id)
        .await?
        .ok_or(UpstreamError::Status {
            service: "match",
            status: 404,
        })?;

    let target = player::normalize_name(&identity.player_name);
    let Some(participant) = record
        .participants
        .iter()
        .find(|p| player::normalize_name(&p.summoner_name) == target)
    else {
        return Ok(Outcome::Empty(format!(
            "Couldn't find {} in their latest game",
            identity.player_name
        )));
    };

    Ok(Outcome::Text(formatters::recent::format(
        &record,
        participant,
        &identity.player_name,
        statics,
    )))
}
