//! Match tuning, player setup and arena layout.
//!
//! Everything here deserializes from JSON with defaults for missing fields,
//! and is validated once before the engine is built.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::{TankColor, Transform};

/// Numeric tunables for a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub rounds_to_win: u32,
    pub start_delay_secs: f64,
    pub end_delay_secs: f64,
    /// Match time ceiling. Reaching it ends the match with no winner.
    pub max_match_secs: f64,
    pub post_match_delay_secs: f64,
    pub starting_health: f32,
    pub enemy: EnemyTuning,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds_to_win: DEFAULT_ROUNDS_TO_WIN,
            start_delay_secs: DEFAULT_START_DELAY_SECS,
            end_delay_secs: DEFAULT_END_DELAY_SECS,
            max_match_secs: DEFAULT_MAX_MATCH_SECS,
            post_match_delay_secs: DEFAULT_POST_MATCH_DELAY_SECS,
            starting_health: DEFAULT_STARTING_HEALTH,
            enemy: EnemyTuning::default(),
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds_to_win == 0 {
            return Err(invalid("rounds_to_win", "must be at least 1"));
        }
        non_negative("start_delay_secs", self.start_delay_secs)?;
        non_negative("end_delay_secs", self.end_delay_secs)?;
        non_negative("post_match_delay_secs", self.post_match_delay_secs)?;
        if !(self.max_match_secs.is_finite() && self.max_match_secs > 0.0) {
            return Err(invalid("max_match_secs", "must be positive and finite"));
        }
        if !(self.starting_health.is_finite() && self.starting_health > 0.0) {
            return Err(invalid("starting_health", "must be positive and finite"));
        }
        self.enemy.validate()
    }
}

/// Enemy AI tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub detect_range: f32,
    pub move_speed: f32,
    pub rotation_speed: f32,
    pub arrival_radius: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            detect_range: DEFAULT_ENEMY_DETECT_RANGE,
            move_speed: DEFAULT_ENEMY_MOVE_SPEED,
            rotation_speed: DEFAULT_ENEMY_ROTATION_SPEED,
            arrival_radius: DEFAULT_WAYPOINT_ARRIVAL_RADIUS,
        }
    }
}

impl EnemyTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative_f32("enemy.detect_range", self.detect_range)?;
        non_negative_f32("enemy.move_speed", self.move_speed)?;
        non_negative_f32("enemy.rotation_speed", self.rotation_speed)?;
        non_negative_f32("enemy.arrival_radius", self.arrival_radius)
    }
}

/// Per-player setup chosen in the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub is_computer: bool,
    pub color: TankColor,
    pub control_index: i32,
}

impl PlayerConfig {
    pub fn human(color: TankColor, control_index: i32) -> Self {
        Self {
            is_computer: false,
            color,
            control_index,
        }
    }
}

/// Where an enemy starts and the route it walks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub spawn: Transform,
    #[serde(default)]
    pub waypoints: Vec<Vec3>,
}

/// Spawn table for players (indexed by slot) and enemies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaLayout {
    pub spawn_points: Vec<Transform>,
    #[serde(default)]
    pub enemy_spawns: Vec<EnemySpawn>,
}

impl ArenaLayout {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Four corner slots facing the middle, and two enemies patrolling
    /// squares along the north and south edges.
    pub fn default_arena() -> Self {
        let corner = |x: f32, z: f32| {
            let position = Vec3::new(x, 0.0, z);
            let rotation = crate::types::look_rotation(-position).unwrap_or(Quat::IDENTITY);
            Transform::new(position, rotation)
        };

        let square = |cx: f32, cz: f32, half: f32| {
            vec![
                Vec3::new(cx - half, 0.0, cz - half),
                Vec3::new(cx + half, 0.0, cz - half),
                Vec3::new(cx + half, 0.0, cz + half),
                Vec3::new(cx - half, 0.0, cz + half),
            ]
        };

        Self {
            spawn_points: vec![
                corner(-30.0, -30.0),
                corner(30.0, 30.0),
                corner(30.0, -30.0),
                corner(-30.0, 30.0),
            ],
            enemy_spawns: vec![
                EnemySpawn {
                    spawn: Transform::at(Vec3::new(-5.0, 0.0, 20.0)),
                    waypoints: square(0.0, 20.0, 5.0),
                },
                EnemySpawn {
                    spawn: Transform::at(Vec3::new(5.0, 0.0, -20.0)),
                    waypoints: square(0.0, -20.0, 5.0),
                },
            ],
        }
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be non-negative and finite"))
    }
}

fn non_negative_f32(field: &'static str, value: f32) -> Result<(), ConfigError> {
    non_negative(field, value as f64)
}
