//! Commands sent to the match engine by the host or the combat system.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::PlayerConfig;
use crate::enums::CombatantId;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    // --- Match control ---
    /// Leave the menu and start a match with these players.
    StartMatch { players: Vec<PlayerConfig> },

    // --- Combat ---
    /// A hit landed on a combatant.
    ApplyDamage { target: CombatantId, amount: f32 },
    /// Health pickup.
    Heal { target: CombatantId, amount: f32 },
    /// Shield pickup (or its removal).
    ToggleShield { target: CombatantId },
    /// Invincibility pickup (or its removal).
    ToggleInvincibility { target: CombatantId },

    // --- Input ---
    /// Movement input for a player tank. Dropped while controls are locked.
    MovePlayer {
        slot: usize,
        position: Vec3,
        rotation: Quat,
    },
}
