//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Coarse game mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    MainMenu,
    Game,
}

/// Fine-grained match phase driven by the round state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No match running.
    #[default]
    MainMenu,
    /// Tanks reset, controls locked, round banner shown.
    RoundStarting,
    /// Controls live; waiting for elimination or time-up.
    RoundPlaying,
    /// Controls locked, round result shown.
    RoundEnding,
    /// Final message held before the scene resets.
    MatchOver,
}

impl MatchPhase {
    /// The coarse mode this phase belongs to.
    pub fn mode(&self) -> GameMode {
        match self {
            MatchPhase::MainMenu => GameMode::MainMenu,
            _ => GameMode::Game,
        }
    }
}

/// Enemy behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Walking the patrol route.
    #[default]
    Patrol,
    /// Chasing the nearest player.
    Pursue,
}

/// Reference to any combatant: a player slot or an AI enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatantId {
    /// Player slot index (0-based, matches player config order).
    Player(usize),
    /// Enemy id assigned at spawn.
    Enemy(u32),
}

/// Result of a single damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// Blocked by invincibility.
    Invincible,
    /// Blocked by the shield, which is now consumed.
    ShieldAbsorbed,
    /// Health reduced; still alive (or already dead).
    Damaged,
    /// Health reduced and this hit caused death.
    Killed,
}
