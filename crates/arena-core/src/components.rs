//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems,
//! except for [`crate::health::Health`], which owns its own rules.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyState;
use crate::types::TankColor;
use glam::Vec3;

/// Marks an entity as a player tank. Enemies target these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTank {
    /// Slot index into the spawn table (0-based).
    pub slot: usize,
    /// Display number (`slot + 1`).
    pub player_number: u32,
    pub color: TankColor,
    /// Input device the player drives with.
    pub control_index: i32,
    pub is_computer: bool,
    /// Round wins this match. Never decreases within a match.
    pub wins: u32,
    /// Whether movement input is currently accepted.
    pub control_enabled: bool,
}

impl PlayerTank {
    /// Player name wrapped in a rich-text color tag.
    pub fn colored_name(&self) -> String {
        format!(
            "<color=#{}>PLAYER {}</color>",
            self.color.to_hex(),
            self.player_number
        )
    }
}

/// AI-driven enemy tank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyTank {
    pub id: u32,
    pub state: EnemyState,
    /// Player slot picked as target on the last tick.
    pub target: Option<usize>,
}

/// Cyclic patrol route plus the cursor into it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatrolRoute {
    pub waypoints: Vec<Vec3>,
    pub current: usize,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec3>) -> Self {
        Self {
            waypoints,
            current: 0,
        }
    }

    /// The waypoint currently being walked to, if the route is non-empty.
    pub fn current_waypoint(&self) -> Option<Vec3> {
        self.waypoints.get(self.current).copied()
    }

    /// Move the cursor to the next waypoint, wrapping at the end.
    pub fn advance(&mut self) {
        if !self.waypoints.is_empty() {
            self.current = (self.current + 1) % self.waypoints.len();
        }
    }
}

/// Whether the entity is present in the scene. Dead tanks are inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Active(pub bool);
