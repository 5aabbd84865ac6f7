//! Trending-Streams Pipeline

use crate::domain::{CommandError, Outcome};
use crate::formatters;
use crate::pipelines::Services;

pub const DEFAULT_COUNT: u32 = 5;

/// `count_arg` is the optional free-text argument; anything that is not a
/// positive number falls back to the default.
pub async fn run(services: &Services, count_arg: &str) -> Result<Outcome, CommandError> {
    let count = count_arg
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_COUNT);

    let streams = services.streams.top_streams(count).await?;
    if streams.is_empty() {
        return Ok(Outcome::Empty("No live streams right now.".to_string()));
    }

    Ok(Outcome::Text(formatters::twitch::format(&streams)))
}
