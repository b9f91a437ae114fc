//! Match state snapshot: the complete visible state after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::MatchEvent;
use crate::types::{SimTime, TankColor, Transform};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub mode: GameMode,
    pub phase: MatchPhase,
    pub round: u32,
    /// Seconds since the match started (0 in the menu).
    pub match_elapsed_secs: f64,
    pub time_up: bool,
    /// Last text written to the message display.
    pub message: String,
    /// Last text written to the timer display.
    pub timer: String,
    pub players: Vec<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub events: Vec<MatchEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub slot: usize,
    pub player_number: u32,
    pub colored_name: String,
    /// Input device the tank is bound to.
    pub control_index: i32,
    /// Driven by the computer rather than a local input device.
    pub is_computer: bool,
    pub transform: Transform,
    pub active: bool,
    pub control_enabled: bool,
    pub wins: u32,
    pub health: HealthView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub transform: Transform,
    pub active: bool,
    pub state: EnemyState,
    pub target: Option<usize>,
    pub health: HealthView,
}

/// Health bar projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthView {
    pub current: f32,
    pub fraction: f32,
    pub bar_color: TankColor,
    pub shielded: bool,
    pub invincible: bool,
    pub dead: bool,
}
