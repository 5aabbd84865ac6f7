//! Domain Layer
//!
//! Entities, value objects and errors shared by every pipeline.

pub mod entities;
pub mod errors;
pub mod region;
pub mod role;

pub use entities::{
    BuildHashes, BuildPayload, CatalogEntry, CatalogKind, MasteryEntry, MatchRecord, Participant,
    RankedEntry, StreamEntry, Summoner,
};
pub use errors::{CommandError, UpstreamError, ValidationError};
pub use region::Region;
pub use role::Role;

/// A validated `(region, player name)` pair, the input to every
/// identity-dependent pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub region: Region,
    pub player_name: String,
}

/// What a pipeline hands back when it did not fail outright.
///
/// `Empty` is an upstream-confirmed absence ("player not found", "no ranked
/// data") and carries the user-facing reason; errors travel separately as
/// [`CommandError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fully formatted reply text.
    Text(String),
    /// The entity was confirmed absent upstream; the reason is shown as-is.
    Empty(String),
}
