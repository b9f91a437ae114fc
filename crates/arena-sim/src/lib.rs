//! Match engine for the tank arena.
//!
//! Owns the hecs ECS world, runs the enemy AI and the round state machine
//! on a single tick, and produces MatchSnapshots for the host.

pub mod engine;
pub mod match_state;
pub mod messages;
pub mod sinks;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use engine::{MatchEngine, MatchEngineBuilder};
