//! Live Stream Entity

use serde::{Deserialize, Serialize};

/// One live channel from the streaming-service listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamEntry {
    pub channel: String,
    /// The channel's current status line / stream title.
    pub status: String,
    pub viewers: u64,
    pub url: String,
}
