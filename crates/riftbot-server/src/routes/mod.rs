//! Riftbot HTTP surface
//!
//! - /health - liveness probe
//! - /commands - the single inbound command endpoint the chat transport posts to

pub mod commands;
