//! Enemy AI for the tank arena.
//!
//! Implements the patrol/pursue state machine and nearest-player
//! target selection.

pub mod fsm;
pub mod targeting;

pub use arena_core as core;

#[cfg(test)]
mod tests;
