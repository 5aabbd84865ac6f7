//! Upstream Service Ports
//!
//! One trait per independent upstream. Every call resolves to one of three
//! outcomes: a payload, an explicit not-found (`Ok(None)`), or a failure.
//! Adapters own the mapping from HTTP statuses: 404 is `Ok(None)`, any other
//! non-success status or transport error is `Err(UpstreamError)`.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::entities::{
    BuildPayload, CatalogEntry, CatalogKind, MasteryEntry, MatchRecord, RankedEntry, StreamEntry,
    Summoner,
};
use crate::domain::errors::UpstreamError;
use crate::domain::region::Region;
use crate::domain::role::Role;

/// Player-identity service: resolves a normalized name to a summoner record.
///
/// The mandatory first step of every identity-dependent pipeline. `name` must
/// already be in canonical form (lowercased, spaces stripped).
#[async_trait]
pub trait SummonerService: Send + Sync {
    async fn by_name(&self, region: Region, name: &str)
        -> Result<Option<Summoner>, UpstreamError>;
}

/// Ranked-standings service, keyed by opaque summoner ID.
#[async_trait]
pub trait RankedService: Send + Sync {
    async fn entries(
        &self,
        region: Region,
        summoner_id: i64,
    ) -> Result<Option<Vec<RankedEntry>>, UpstreamError>;
}

/// Champion-mastery service, keyed by opaque summoner ID.
#[async_trait]
pub trait MasteryService: Send + Sync {
    async fn top_champions(
        &self,
        region: Region,
        summoner_id: i64,
        count: u32,
    ) -> Result<Option<Vec<MasteryEntry>>, UpstreamError>;
}

/// Match-history service, two-step: a summary lookup yields the latest match
/// ID, then the full record is fetched by that ID.
#[async_trait]
pub trait MatchService: Send + Sync {
    async fn latest_match_id(
        &self,
        region: Region,
        account_id: i64,
    ) -> Result<Option<i64>, UpstreamError>;

    async fn match_by_id(
        &self,
        region: Region,
        match_id: i64,
    ) -> Result<Option<MatchRecord>, UpstreamError>;
}

/// Build-recommendation service, keyed by champion short code and role.
/// With no role given the upstream picks the champion's most played one.
#[async_trait]
pub trait BuildService: Send + Sync {
    async fn winrate_build(
        &self,
        champion_key: &str,
        role: Option<Role>,
    ) -> Result<Option<BuildPayload>, UpstreamError>;
}

/// Live-streams listing service.
#[async_trait]
pub trait StreamsService: Send + Sync {
    async fn top_streams(&self, count: u32) -> Result<Vec<StreamEntry>, UpstreamError>;
}

/// Bulk static-catalog service, consumed once per catalog at bootstrap.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn fetch(&self, kind: CatalogKind)
        -> Result<HashMap<u32, CatalogEntry>, UpstreamError>;
}
