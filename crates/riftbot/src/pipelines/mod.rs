//! Aggregation Pipelines
//!
//! One module per command. Every identity-dependent pipeline follows the
//! same shape: resolved identity, then the player lookup, then the dependent
//! upstream call(s) in order, then a formatter. Stages run strictly in
//! sequence because each stage's input is the previous stage's output;
//! `Empty` outcomes and errors short-circuit the rest.

pub mod build;
pub mod game;
pub mod mastery;
pub mod player;
pub mod ranked;
pub mod recent;
pub mod twitch;

use std::sync::Arc;

use crate::ports::{
    BuildService, MasteryService, MatchService, RankedService, StreamsService, SummonerService,
};

/// The upstream services a pipeline may depend on, wired once at startup.
#[derive(Clone)]
pub struct Services {
    pub summoner: Arc<dyn SummonerService>,
    pub ranked: Arc<dyn RankedService>,
    pub mastery: Arc<dyn MasteryService>,
    pub matches: Arc<dyn MatchService>,
    pub builds: Arc<dyn BuildService>,
    pub streams: Arc<dyn StreamsService>,
}
