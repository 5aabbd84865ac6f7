//! Live-streams client

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use riftbot::ports::StreamsService;
use riftbot::{StreamEntry, UpstreamError};

use crate::http::fetch_json_required;

const DEFAULT_BASE_URL: &str = "https://api.twitch.tv/kraken";
const GAME: &str = "League of Legends";

pub struct TwitchClient {
    client: reqwest::Client,
    client_id: String,
    base_url: String,
}

impl TwitchClient {
    pub fn new(client_id: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            client_id: client_id.into(),
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
struct WireStreamList {
    #[serde(default)]
    streams: Vec<WireStream>,
}

#[derive(Deserialize)]
struct WireStream {
    viewers: u64,
    channel: WireChannel,
}

#[derive(Deserialize)]
struct WireChannel {
    display_name: String,
    #[serde(default)]
    status: String,
    url: String,
}

#[async_trait]
impl StreamsService for TwitchClient {
    async fn top_streams(&self, count: u32) -> Result<Vec<StreamEntry>, UpstreamError> {
        let url = format!("{}/streams", self.base_url);
        debug!(%url, count, "streams request");

        let request = self
            .client
            .get(url)
            .header("Client-ID", &self.client_id)
            .query(&[("game", GAME)])
            .query(&[("limit", count)]);

        let payload = fetch_json_required::<WireStreamList>("streams", request).await?;
        Ok(payload
            .streams
            .into_iter()
            .map(|stream| StreamEntry {
                channel: stream.channel.display_name,
                status: stream.channel.status,
                viewers: stream.viewers,
                url: stream.channel.url,
            })
            .collect())
    }
}
