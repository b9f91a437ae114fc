//! Headless tank arena host.
//!
//! Wires the match engine to logging collaborators, drives it from a
//! dedicated game loop thread and feeds it scripted skirmish commands.

pub mod game_loop;
pub mod sinks;
pub mod skirmish;
pub mod state;

pub use arena_core as core;
