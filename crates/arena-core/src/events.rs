//! Events emitted by the simulation for audio, VFX and UI feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{CombatantId, EnemyState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// Players were spawned and the first round is about to start.
    MatchStarted { players: usize },
    RoundStarted { round: u32 },
    /// Round finished. `winner` is a player slot; `None` on a draw or time-up.
    RoundEnded { round: u32, winner: Option<usize> },
    /// The match clock hit the ceiling.
    TimeUp,
    /// `winner` is `None` when the match ended on time.
    MatchEnded {
        winner: Option<usize>,
        elapsed_secs: f64,
    },
    /// The scene was reset to its initial state.
    SceneReloaded,
    /// A tank died. Drives the explosion particles and audio.
    Explosion {
        combatant: CombatantId,
        position: Vec3,
    },
    /// Shield consumed by a hit.
    ShieldBroken { combatant: CombatantId },
    /// An enemy switched between patrolling and pursuing.
    EnemyStateChanged { enemy: u32, state: EnemyState },
}
