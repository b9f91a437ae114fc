//! Entity spawn factories for setting up the arena world.

use hecs::World;

use arena_core::components::*;
use arena_core::config::{ArenaLayout, PlayerConfig};
use arena_core::enums::EnemyState;
use arena_core::health::Health;
use arena_core::types::Transform;

/// Spawn one player tank per config at the spawn point with the same index.
/// Returns the entities in slot order.
///
/// The caller guarantees `players.len() <= layout.spawn_points.len()`.
pub fn spawn_players(
    world: &mut World,
    layout: &ArenaLayout,
    players: &[PlayerConfig],
    starting_health: f32,
) -> Vec<hecs::Entity> {
    players
        .iter()
        .zip(&layout.spawn_points)
        .enumerate()
        .map(|(slot, (config, spawn))| {
            world.spawn((
                PlayerTank {
                    slot,
                    player_number: slot as u32 + 1,
                    color: config.color,
                    control_index: config.control_index,
                    is_computer: config.is_computer,
                    wins: 0,
                    control_enabled: false,
                },
                *spawn,
                Health::new(starting_health),
                Active(true),
            ))
        })
        .collect()
}

/// Spawn every enemy listed in the layout. Ids follow layout order.
pub fn spawn_enemies(
    world: &mut World,
    layout: &ArenaLayout,
    starting_health: f32,
) -> Vec<hecs::Entity> {
    layout
        .enemy_spawns
        .iter()
        .enumerate()
        .map(|(id, enemy)| {
            world.spawn((
                EnemyTank {
                    id: id as u32,
                    state: EnemyState::default(),
                    target: None,
                },
                enemy.spawn,
                PatrolRoute::new(enemy.waypoints.clone()),
                Health::new(starting_health),
                Active(true),
            ))
        })
        .collect()
}

/// Put a player tank back on its spawn point, alive, at full health.
pub fn reset_player(world: &mut World, entity: hecs::Entity, spawn: Transform) {
    if let Ok((transform, health, active)) =
        world.query_one_mut::<(&mut Transform, &mut Health, &mut Active)>(entity)
    {
        *transform = spawn;
        health.reset();
        active.0 = true;
    }
}
