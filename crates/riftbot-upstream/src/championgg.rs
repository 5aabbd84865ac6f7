//! Build-recommendation client
//!
//! Fetches the highest-winrate build for a champion. The interesting payload
//! parts are the delimited hash strings; they are passed through raw and
//! decoded section by section in the core's build formatter.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use riftbot::ports::BuildService;
use riftbot::{BuildHashes, BuildPayload, Role, UpstreamError};

use crate::http::fetch_json;

const DEFAULT_BASE_URL: &str = "https://api.champion.gg";

pub struct ChampionGgClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ChampionGgClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the endpoint. For tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBuild {
    role: String,
    #[serde(default)]
    win_rate: f64,
    #[serde(default)]
    hashes: WireHashes,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct WireHashes {
    firstitems: Option<WireHash>,
    finalitems: Option<WireHash>,
    summoners: Option<WireHash>,
    runes: Option<WireHash>,
    masteries: Option<WireHash>,
    skillorder: Option<WireHash>,
}

#[derive(Deserialize)]
struct WireHash {
    hash: String,
}

impl WireBuild {
    fn into_payload(self) -> BuildPayload {
        let hash = |h: Option<WireHash>| h.map(|h| h.hash);
        BuildPayload {
            role: self.role,
            win_rate: self.win_rate,
            hashes: BuildHashes {
                first_items: hash(self.hashes.firstitems),
                final_items: hash(self.hashes.finalitems),
                summoner_spells: hash(self.hashes.summoners),
                runes: hash(self.hashes.runes),
                masteries: hash(self.hashes.masteries),
                skill_order: hash(self.hashes.skillorder),
            },
        }
    }
}

#[async_trait]
impl BuildService for ChampionGgClient {
    async fn winrate_build(
        &self,
        champion_key: &str,
        role: Option<Role>,
    ) -> Result<Option<BuildPayload>, UpstreamError> {
        let url = format!("{}/champions/{}/hashes", self.base_url, champion_key);
        debug!(%url, role = role.map(|r| r.as_upstream()).unwrap_or("any"), "build request");

        let mut request = self.client.get(url).query(&[("api_key", &self.api_key)]);
        if let Some(role) = role {
            request = request.query(&[("role", role.as_upstream())]);
        }

        let payload = fetch_json::<WireBuild>("build", request).await?;
        Ok(payload.map(WireBuild::into_payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn build_payload_keeps_hashes_raw() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/champions/Yasuo/hashes"))
            .and(query_param("role", "MIDDLE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "role": "MIDDLE",
                "winRate": 54.3,
                "hashes": {
                    "finalitems": { "hash": "3089-3135" },
                    "runes": { "hash": "5273-9" },
                    "skillorder": { "hash": "Q-E-W" }
                }
            })))
            .mount(&server)
            .await;

        let payload = ChampionGgClient::new("key")
            .with_base_url(server.uri())
            .winrate_build("Yasuo", Some(Role::Middle))
            .await
            .unwrap()
            .expect("build should be found");

        assert_eq!(payload.role, "MIDDLE");
        assert_eq!(payload.hashes.final_items.as_deref(), Some("3089-3135"));
        assert_eq!(payload.hashes.runes.as_deref(), Some("5273-9"));
        assert!(payload.hashes.first_items.is_none());
    }

    #[tokio::test]
    async fn unknown_champion_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = ChampionGgClient::new("key")
            .with_base_url(server.uri())
            .winrate_build("NoSuch", None)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
