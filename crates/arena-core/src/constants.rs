//! Simulation constants and default tuning parameters.

use crate::types::TankColor;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Match flow ---

/// Round wins needed to take the match.
pub const DEFAULT_ROUNDS_TO_WIN: u32 = 5;

/// Pause before each round begins (seconds).
pub const DEFAULT_START_DELAY_SECS: f64 = 3.0;

/// Pause after each round ends (seconds).
pub const DEFAULT_END_DELAY_SECS: f64 = 3.0;

/// Match time ceiling (4 minutes).
pub const DEFAULT_MAX_MATCH_SECS: f64 = 240.0;

/// How long the final message stays up before the scene resets (seconds).
pub const DEFAULT_POST_MATCH_DELAY_SECS: f64 = 10.0;

// --- Health ---

/// Hit points every tank starts a round with.
pub const DEFAULT_STARTING_HEALTH: f32 = 100.0;

/// Health bar color at full health.
pub const FULL_HEALTH_COLOR: TankColor = TankColor::GREEN;

/// Health bar color at zero health.
pub const ZERO_HEALTH_COLOR: TankColor = TankColor::RED;

// --- Enemy AI ---

/// Distance under which an enemy starts chasing the nearest player.
pub const DEFAULT_ENEMY_DETECT_RANGE: f32 = 15.0;

/// Enemy movement speed (units/s).
pub const DEFAULT_ENEMY_MOVE_SPEED: f32 = 3.0;

/// Enemy slerp rate (fraction of the remaining turn per second).
pub const DEFAULT_ENEMY_ROTATION_SPEED: f32 = 5.0;

/// Distance at which a patrol waypoint counts as reached.
pub const DEFAULT_WAYPOINT_ARRIVAL_RADIUS: f32 = 1.0;

// --- Messages ---

/// Shown when neither tank survives the round.
pub const DRAW_MESSAGE: &str = "DRAW!";

/// Shown when the match clock runs out. English rendering of the Spanish
/// `TIEMPO AGOTADO\nTODOS PIERDEN` banner, matching the other English messages.
pub const TIME_UP_MESSAGE: &str = "TIME'S UP\nEVERYONE LOSES";

/// Separator between the round headline and the tally listing.
pub const TALLY_SEPARATOR: &str = "\n\n\n\n";
