//! Snapshot system: queries the ECS world and builds a complete MatchSnapshot.
//!
//! Read-only: it never modifies the world.

use hecs::World;

use arena_core::components::*;
use arena_core::enums::GameMode;
use arena_core::events::MatchEvent;
use arena_core::health::Health;
use arena_core::state::*;
use arena_core::types::{SimTime, Transform};

use crate::match_state::MatchState;
use crate::sinks::Presenter;

/// Build a complete MatchSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    state: &MatchState,
    presenter: &Presenter,
    events: Vec<MatchEvent>,
) -> MatchSnapshot {
    let match_elapsed_secs = match state.phase.mode() {
        GameMode::Game => state.elapsed_secs(time.elapsed_secs),
        GameMode::MainMenu => 0.0,
    };

    MatchSnapshot {
        time: *time,
        mode: state.phase.mode(),
        phase: state.phase,
        round: state.round,
        match_elapsed_secs,
        time_up: state.time_up,
        message: presenter.message().to_string(),
        timer: presenter.timer().to_string(),
        players: build_players(world, &state.slots),
        enemies: build_enemies(world),
        events,
    }
}

/// Player views in slot order.
fn build_players(world: &World, slots: &[hecs::Entity]) -> Vec<PlayerView> {
    slots
        .iter()
        .filter_map(|&entity| {
            let mut query = world
                .query_one::<(&PlayerTank, &Transform, &Health, &Active)>(entity)
                .ok()?;
            let (tank, transform, health, active) = query.get()?;
            Some(PlayerView {
                slot: tank.slot,
                player_number: tank.player_number,
                colored_name: tank.colored_name(),
                control_index: tank.control_index,
                is_computer: tank.is_computer,
                transform: *transform,
                active: active.0,
                control_enabled: tank.control_enabled,
                wins: tank.wins,
                health: health_view(health),
            })
        })
        .collect()
}

/// Enemy views in id order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyTank, &Transform, &Health, &Active)>()
        .iter()
        .map(|(_, (enemy, transform, health, active))| EnemyView {
            id: enemy.id,
            transform: *transform,
            active: active.0,
            state: enemy.state,
            target: enemy.target,
            health: health_view(health),
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn health_view(health: &Health) -> HealthView {
    HealthView {
        current: health.current(),
        fraction: health.fraction(),
        bar_color: health.bar_color(),
        shielded: health.is_shielded(),
        invincible: health.is_invincible(),
        dead: health.is_dead(),
    }
}
