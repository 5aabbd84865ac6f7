//! Riot API client
//!
//! One client covering the four identity-scoped services: summoner lookup,
//! ranked standings, champion mastery and the two-step match history. The
//! regional host is derived from the [`Region`]; tests override the base URL
//! to point at a mock server.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use riftbot::ports::{MasteryService, MatchService, RankedService, SummonerService};
use riftbot::{MasteryEntry, MatchRecord, Participant, RankedEntry, Region, Summoner, UpstreamError};

use crate::http::fetch_json;

/// Client for the regional game-data API.
pub struct RiotClient {
    client: reqwest::Client,
    api_key: String,
    base_url: Option<String>,
}

impl RiotClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Override the scheme and host, bypassing regional routing. For tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn url(&self, region: Region, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}{}", base, path),
            None => format!("https://{}{}", region.host(), path),
        }
    }

    fn get(&self, region: Region, path: &str) -> reqwest::RequestBuilder {
        let url = self.url(region, path);
        debug!(%url, "riot request");
        self.client.get(url).query(&[("api_key", &self.api_key)])
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSummoner {
    id: i64,
    account_id: i64,
    name: String,
}

#[async_trait]
impl SummonerService for RiotClient {
    async fn by_name(&self, region: Region, name: &str) -> Result<Option<Summoner>, UpstreamError> {
        let path = format!("/api/lol/{}/v1.4/summoner/by-name/{}", region.code(), name);
        // The response is keyed by the normalized name.
        let Some(mut payload) =
            fetch_json::<HashMap<String, WireSummoner>>("summoner", self.get(region, &path)).await?
        else {
            return Ok(None);
        };

        let wire = payload.remove(name).ok_or(UpstreamError::Payload {
            service: "summoner",
            detail: "response missing the requested name".to_string(),
        })?;

        Ok(Some(Summoner {
            id: wire.id,
            account_id: wire.account_id,
            name: wire.name,
        }))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLeague {
    queue: String,
    tier: String,
    entries: Vec<WireLeagueEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLeagueEntry {
    division: String,
    league_points: u32,
}

#[async_trait]
impl RankedService for RiotClient {
    async fn entries(
        &self,
        region: Region,
        summoner_id: i64,
    ) -> Result<Option<Vec<RankedEntry>>, UpstreamError> {
        let path = format!(
            "/api/lol/{}/v2.5/league/by-summoner/{}/entry",
            region.code(),
            summoner_id
        );
        // Keyed by summoner ID; one league object per queue.
        let Some(mut payload) = fetch_json::<HashMap<String, Vec<WireLeague>>>(
            "ranked",
            self.get(region, &path),
        )
        .await?
        else {
            return Ok(None);
        };

        let leagues = payload.remove(&summoner_id.to_string()).unwrap_or_default();
        let entries = leagues
            .into_iter()
            .filter_map(|league| {
                let entry = league.entries.into_iter().next()?;
                Some(RankedEntry {
                    queue: league.queue,
                    tier: league.tier,
                    division: entry.division,
                    league_points: entry.league_points,
                })
            })
            .collect();

        Ok(Some(entries))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMastery {
    champion_id: u32,
    champion_level: u32,
    champion_points: u64,
    #[serde(default)]
    tokens_earned: u32,
}

#[async_trait]
impl MasteryService for RiotClient {
    async fn top_champions(
        &self,
        region: Region,
        summoner_id: i64,
        count: u32,
    ) -> Result<Option<Vec<MasteryEntry>>, UpstreamError> {
        let path = format!(
            "/championmastery/location/{}/player/{}/topchampions",
            region.platform_id(),
            summoner_id
        );
        let request = self.get(region, &path).query(&[("count", count)]);
        let Some(payload) = fetch_json::<Vec<WireMastery>>("mastery", request).await? else {
            return Ok(None);
        };

        Ok(Some(
            payload
                .into_iter()
                .map(|wire| MasteryEntry {
                    champion_id: wire.champion_id,
                    champion_level: wire.champion_level,
                    champion_points: wire.champion_points,
                    tokens_earned: wire.tokens_earned,
                })
                .collect(),
        ))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMatchList {
    #[serde(default)]
    matches: Vec<WireMatchSummary>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMatchSummary {
    game_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMatch {
    game_mode: String,
    #[serde(default)]
    sub_type: String,
    game_duration: u64,
    #[serde(default)]
    participants: Vec<WireParticipant>,
    #[serde(default)]
    participant_identities: Vec<WireParticipantIdentity>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireParticipant {
    participant_id: u32,
    champion_id: u32,
    stats: WireParticipantStats,
}

// Absent stats are zero, as the upstream omits fields that did not occur.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct WireParticipantStats {
    win: bool,
    kills: u32,
    deaths: u32,
    assists: u32,
    minions_killed: u32,
    neutral_minions_killed: u32,
    gold_earned: u64,
    total_damage_dealt_to_champions: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireParticipantIdentity {
    participant_id: u32,
    player: WirePlayer,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePlayer {
    summoner_name: String,
}

impl WireMatch {
    /// Join the participant and identity lists by participant ID so each
    /// domain participant carries its display name. Slots with no identity
    /// (old anonymized records) keep an empty name and simply never match.
    fn into_record(self) -> MatchRecord {
        let names: HashMap<u32, String> = self
            .participant_identities
            .into_iter()
            .map(|identity| (identity.participant_id, identity.player.summoner_name))
            .collect();

        let participants = self
            .participants
            .into_iter()
            .map(|p| Participant {
                summoner_name: names.get(&p.participant_id).cloned().unwrap_or_default(),
                champion_id: p.champion_id,
                win: p.stats.win,
                kills: p.stats.kills,
                deaths: p.stats.deaths,
                assists: p.stats.assists,
                minions_killed: p.stats.minions_killed,
                neutral_minions_killed: p.stats.neutral_minions_killed,
                gold_earned: p.stats.gold_earned,
                damage_to_champions: p.stats.total_damage_dealt_to_champions,
            })
            .collect();

        MatchRecord {
            game_mode: self.game_mode,
            queue: self.sub_type,
            duration_secs: self.game_duration,
            participants,
        }
    }
}

#[async_trait]
impl MatchService for RiotClient {
    async fn latest_match_id(
        &self,
        region: Region,
        account_id: i64,
    ) -> Result<Option<i64>, UpstreamError> {
        let path = format!("/lol/match/matchlists/by-account/{}/recent", account_id);
        let Some(payload) = fetch_json::<WireMatchList>("matchlist", self.get(region, &path)).await?
        else {
            return Ok(None);
        };

        Ok(payload.matches.first().map(|m| m.game_id))
    }

    async fn match_by_id(
        &self,
        region: Region,
        match_id: i64,
    ) -> Result<Option<MatchRecord>, UpstreamError> {
        let path = format!("/lol/match/matches/{}", match_id);
        let Some(payload) = fetch_json::<WireMatch>("match", self.get(region, &path)).await? else {
            return Ok(None);
        };

        Ok(Some(payload.into_record()))
    }
}
