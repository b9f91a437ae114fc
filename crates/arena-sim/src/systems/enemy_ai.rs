//! Enemy AI system: updates every active enemy tank each tick.
//!
//! Scans the live player tanks once, calls the enemy FSM from
//! arena-enemy-ai for each enemy, then writes the results back.

use hecs::World;
use tracing::debug;

use arena_core::components::{Active, EnemyTank, PatrolRoute, PlayerTank};
use arena_core::config::EnemyTuning;
use arena_core::events::MatchEvent;
use arena_core::types::Transform;

use arena_enemy_ai::fsm::{evaluate, EnemyContext, EnemyUpdate};
use arena_enemy_ai::targeting::PlayerSighting;

/// Run the enemy AI system.
pub fn run(world: &mut World, tuning: &EnemyTuning, dt: f32, events: &mut Vec<MatchEvent>) {
    let players = live_players(world);

    // Collect updates in a buffer to avoid borrow issues with hecs
    let mut updates: Vec<(hecs::Entity, u32, EnemyUpdate)> = Vec::new();

    {
        let mut query = world.query::<(&EnemyTank, &Transform, &PatrolRoute, &Active)>();
        for (entity, (enemy, transform, route, active)) in query.iter() {
            if !active.0 {
                continue;
            }

            let ctx = EnemyContext {
                state: enemy.state,
                position: transform.position,
                rotation: transform.rotation,
                players: &players,
                waypoint: route.current_waypoint(),
                tuning,
                dt,
            };

            updates.push((entity, enemy.id, evaluate(&ctx)));
        }
    }

    // Apply updates in id order so event order does not depend on archetype layout
    updates.sort_by_key(|(_, id, _)| *id);

    for (entity, id, update) in updates {
        if let Ok((enemy, transform, route)) =
            world.query_one_mut::<(&mut EnemyTank, &mut Transform, &mut PatrolRoute)>(entity)
        {
            enemy.state = update.new_state;
            enemy.target = update.target;
            transform.position = update.position;
            transform.rotation = update.rotation;
            if update.waypoint_reached {
                route.advance();
            }
        }

        if update.state_changed {
            debug!(enemy = id, state = ?update.new_state, target = ?update.target, "Enemy state changed");
            events.push(MatchEvent::EnemyStateChanged {
                enemy: id,
                state: update.new_state,
            });
        }
    }
}

/// Active player tanks in slot order.
fn live_players(world: &World) -> Vec<PlayerSighting> {
    let mut players: Vec<PlayerSighting> = world
        .query::<(&PlayerTank, &Transform, &Active)>()
        .iter()
        .filter(|(_, (_, _, active))| active.0)
        .map(|(_, (tank, transform, _))| PlayerSighting {
            slot: tank.slot,
            position: transform.position,
        })
        .collect();
    players.sort_by_key(|p| p.slot);
    players
}
