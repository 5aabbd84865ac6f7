//! Bulk static-catalog client
//!
//! Fetches the five reference catalogs from the global static-data endpoint.
//! Consumed once per catalog by the startup bootstrap; a failed fetch leaves
//! that catalog empty and the formatters degrade to raw IDs.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use riftbot::ports::CatalogService;
use riftbot::{CatalogEntry, CatalogKind, UpstreamError};

use crate::http::fetch_json_required;

const DEFAULT_BASE_URL: &str = "https://global.api.riotgames.com/api/lol/static-data/EUW/v1.2";

pub struct StaticDataClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl StaticDataClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
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
struct WireCatalog {
    data: HashMap<String, WireEntry>,
}

#[derive(Deserialize)]
struct WireEntry {
    id: u32,
    name: String,
    /// Champions carry a short code; other catalogs may not.
    #[serde(default)]
    key: Option<String>,
}

#[async_trait]
impl CatalogService for StaticDataClient {
    async fn fetch(
        &self,
        kind: CatalogKind,
    ) -> Result<HashMap<u32, CatalogEntry>, UpstreamError> {
        let url = format!("{}/{}", self.base_url, kind.as_str());
        debug!(%url, catalog = %kind, "catalog request");

        let request = self
            .client
            .get(url)
            .query(&[("dataById", "true"), ("api_key", self.api_key.as_str())]);

        let payload = fetch_json_required::<WireCatalog>("static-data", request).await?;
        Ok(payload
            .data
            .into_values()
            .map(|wire| {
                let key = wire.key.unwrap_or_else(|| wire.id.to_string());
                (
                    wire.id,
                    CatalogEntry {
                        id: wire.id,
                        name: wire.name,
                        key,
                    },
                )
            })
            .collect())
    }
}
