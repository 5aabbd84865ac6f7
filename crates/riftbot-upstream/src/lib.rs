//! HTTP Adapters for Riftbot
//!
//! Concrete reqwest-backed implementations of the upstream ports defined in
//! the riftbot domain crate. Every adapter maps HTTP outcomes the same way:
//! 404 is an explicit not-found, any other non-success status or transport
//! error is an upstream failure, and a success body that does not decode is
//! a payload failure.

mod championgg;
mod http;
mod riot;
mod staticdata;
mod twitch;

pub use championgg::ChampionGgClient;
pub use riot::RiotClient;
pub use staticdata::StaticDataClient;
pub use twitch::TwitchClient;
