//! Damage system: applies hits and pickups to a combatant's health.
//!
//! Death deactivates the tank and emits the explosion event exactly once.

use hecs::{Entity, World};
use tracing::{debug, info};

use arena_core::components::Active;
use arena_core::enums::{CombatantId, DamageOutcome};
use arena_core::events::MatchEvent;
use arena_core::health::Health;
use arena_core::types::Transform;

/// Apply a hit to `entity`. Returns `None` if it has no health component.
pub fn apply_damage(
    world: &mut World,
    entity: Entity,
    combatant: CombatantId,
    amount: f32,
    events: &mut Vec<MatchEvent>,
) -> Option<DamageOutcome> {
    let (health, active, transform) = world
        .query_one_mut::<(&mut Health, &mut Active, &Transform)>(entity)
        .ok()?;

    let outcome = health.apply_damage(amount);

    match outcome {
        DamageOutcome::Killed => {
            active.0 = false;
            info!(?combatant, "Tank destroyed");
            events.push(MatchEvent::Explosion {
                combatant,
                position: transform.position,
            });
        }
        DamageOutcome::ShieldAbsorbed => {
            debug!(?combatant, amount, "Shield absorbed hit");
            events.push(MatchEvent::ShieldBroken { combatant });
        }
        DamageOutcome::Invincible | DamageOutcome::Damaged => {}
    }

    Some(outcome)
}

/// Run `f` against the health of `entity`. Returns `None` if it has none.
pub fn with_health<R>(
    world: &mut World,
    entity: Entity,
    f: impl FnOnce(&mut Health) -> R,
) -> Option<R> {
    let mut health = world.get::<&mut Health>(entity).ok()?;
    Some(f(&mut health))
}
