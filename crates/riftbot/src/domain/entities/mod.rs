//! Domain Entities
//!
//! Normalized shapes of the upstream payloads. Adapters own the wire formats
//! and map them into these types; pipelines and formatters only ever see
//! these.

pub mod build;
pub mod catalog;
pub mod game;
pub mod mastery;
pub mod ranked;
pub mod stream;
pub mod summoner;

pub use build::{BuildHashes, BuildPayload};
pub use catalog::{CatalogEntry, CatalogKind};
pub use game::{MatchRecord, Participant};
pub use mastery::MasteryEntry;
pub use ranked::RankedEntry;
pub use stream::StreamEntry;
pub use summoner::Summoner;
