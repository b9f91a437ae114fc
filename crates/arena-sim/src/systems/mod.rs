//! ECS systems that operate on the arena world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever engine state
//! they need. They do not own state.

pub mod damage;
pub mod enemy_ai;
pub mod round;
pub mod snapshot;
pub mod timer;
