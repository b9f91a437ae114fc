//! Enemy behavior finite state machine.
//!
//! Pure functions that compute the state, target and next transform of one
//! enemy tank from plain data. No ECS dependency.
//!
//! The state is re-derived from scratch every tick: the nearest live player
//! is pursued while strictly inside the detect range, otherwise the enemy
//! walks its patrol route.

use glam::{Quat, Vec3};

use arena_core::config::EnemyTuning;
use arena_core::enums::EnemyState;
use arena_core::types::look_rotation;

use crate::targeting::{nearest_player, PlayerSighting};

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext<'a> {
    pub state: EnemyState,
    pub position: Vec3,
    pub rotation: Quat,
    /// Live player tanks in scan order.
    pub players: &'a [PlayerSighting],
    /// Waypoint the patrol is heading to; `None` for an empty route.
    pub waypoint: Option<Vec3>,
    pub tuning: &'a EnemyTuning,
    pub dt: f32,
}

/// Output from the enemy FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyUpdate {
    pub new_state: EnemyState,
    pub state_changed: bool,
    /// Slot of the nearest live player, whether or not it is in range.
    pub target: Option<usize>,
    pub position: Vec3,
    pub rotation: Quat,
    /// The current waypoint was reached; move the route cursor on.
    pub waypoint_reached: bool,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let lock = nearest_player(ctx.position, ctx.players);

    let pursuing = lock.filter(|lock| lock.distance < ctx.tuning.detect_range);

    let mut update = match pursuing {
        Some(lock) => pursue(ctx, lock.position),
        None => patrol(ctx),
    };

    update.target = lock.map(|lock| lock.slot);
    update.state_changed = update.new_state != ctx.state;
    update
}

fn pursue(ctx: &EnemyContext, target: Vec3) -> EnemyUpdate {
    let (position, rotation) = step_toward(ctx, target);
    EnemyUpdate {
        new_state: EnemyState::Pursue,
        state_changed: false,
        target: None,
        position,
        rotation,
        waypoint_reached: false,
    }
}

fn patrol(ctx: &EnemyContext) -> EnemyUpdate {
    let Some(waypoint) = ctx.waypoint else {
        // Nowhere to go: hold position and facing.
        return EnemyUpdate {
            new_state: EnemyState::Patrol,
            state_changed: false,
            target: None,
            position: ctx.position,
            rotation: ctx.rotation,
            waypoint_reached: false,
        };
    };

    let (position, rotation) = step_toward(ctx, waypoint);
    EnemyUpdate {
        new_state: EnemyState::Patrol,
        state_changed: false,
        target: None,
        position,
        rotation,
        waypoint_reached: position.distance(waypoint) < ctx.tuning.arrival_radius,
    }
}

/// Move at constant speed toward `goal` and turn part of the way to face
/// the direction of travel.
fn step_toward(ctx: &EnemyContext, goal: Vec3) -> (Vec3, Quat) {
    let direction = (goal - ctx.position).normalize_or_zero();
    let position = ctx.position + direction * ctx.tuning.move_speed * ctx.dt;
    let rotation = turn_toward(ctx.rotation, direction, ctx.tuning.rotation_speed * ctx.dt);
    (position, rotation)
}

/// Slerp `current` toward facing `direction` by fraction `t` (clamped to
/// [0, 1]). A zero direction keeps the current facing.
pub fn turn_toward(current: Quat, direction: Vec3, t: f32) -> Quat {
    match look_rotation(direction) {
        Some(goal) => current.slerp(goal, t.clamp(0.0, 1.0)),
        None => current,
    }
}
