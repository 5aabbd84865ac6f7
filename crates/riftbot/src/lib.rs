//! Riftbot Domain Library
//!
//! Core types and logic for the Riftbot command pipeline: turning a raw chat
//! command into a resolved request, driving the dependent upstream lookups in
//! order, and rendering the result as a reply.
//!
//! # Architecture
//!
//! - **Domain** (`domain/`): entities, value objects and the error taxonomy
//! - **Ports** (`ports/`): traits for the upstream game-data services;
//!   implementations live in separate crates (e.g. riftbot-upstream)
//! - **Commands** (`commands/`): tokenizer, identity resolver and the
//!   dispatcher that routes an [`Invocation`] to a pipeline
//! - **Pipelines** (`pipelines/`): one per command; each chains its upstream
//!   calls off the resolved identity and hands the payload to a formatter
//! - **Formatters** (`formatters/`): pure payload-to-text rendering
//! - **Static data** (`staticdata/`): the asynchronously bootstrapped
//!   reference catalogs and the champion/role alias tables

pub mod commands;
pub mod domain;
pub mod formatters;
pub mod pipelines;
pub mod ports;
pub mod profiles;
pub mod staticdata;

// Re-export commonly used types
pub use commands::{Bot, BotReply, ChatContext, Invocation, Markup};
pub use domain::{
    BuildHashes, BuildPayload, CatalogEntry, CatalogKind, CommandError, MasteryEntry, MatchRecord,
    Outcome, Participant, RankedEntry, Region, ResolvedIdentity, Role, StreamEntry, Summoner,
    UpstreamError, ValidationError,
};
pub use pipelines::Services;
pub use profiles::{CallerProfile, ProfileMap};
pub use staticdata::StaticDataHandle;
