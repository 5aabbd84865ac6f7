//! Ports
//!
//! Abstract interfaces for the upstream game-data services. Concrete HTTP
//! implementations live in the riftbot-upstream crate; tests swap in mocks.

pub mod upstream;

pub use upstream::{
    BuildService, CatalogService, MasteryService, MatchService, RankedService, StreamsService,
    SummonerService,
};
