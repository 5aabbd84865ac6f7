//! Error Taxonomy
//!
//! Every failure surface in the pipeline maps onto one of these kinds:
//! validation failures are resolved locally before any I/O, upstream failures
//! cover transport errors, unexpected statuses and undecodable payloads, and
//! parse failures cover decode steps past a successful upstream exchange.
//! The split drives the error unifier: validation messages are shown to the
//! caller verbatim, everything else collapses to a generic apology.

use thiserror::Error;

/// Caller input that cannot possibly succeed. Never triggers network I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown region '{supplied}'. Valid regions: {valid}")]
    InvalidRegion { supplied: String, valid: String },

    #[error("Invalid summoner name.")]
    InvalidName,

    #[error("Wrong number of arguments.")]
    InvalidArgumentCount,

    #[error("No profile configured for this user.")]
    ProfileMissing,

    #[error("Unknown champion '{0}'.")]
    UnknownChampion(String),
}

/// A dependent upstream call that did not produce a usable payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status} from {service}")]
    Status { service: &'static str, status: u16 },

    #[error("undecodable payload from {service}: {detail}")]
    Payload { service: &'static str, detail: String },
}

/// The unified failure arm of a pipeline result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// A payload decoded structurally but its content did not match
    /// expectations (e.g. a build hash that is not an ID list).
    #[error("parse failure: {0}")]
    Parse(String),
}

impl CommandError {
    /// Whether this error may carry internal detail the caller must not see.
    pub fn is_internal(&self) -> bool {
        !matches!(self, CommandError::Validation(_))
    }
}
