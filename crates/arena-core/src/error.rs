//! Error types for configuration, engine setup and match control.

/// Invalid or unreadable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A required collaborator or layout entry is missing when building the engine.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Missing required collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("Arena layout has no player spawn points")]
    NoSpawnPoints,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A match-control request the engine refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    #[error("A match is already running")]
    AlreadyRunning,

    #[error("At least one player is required")]
    NoPlayers,

    #[error("{requested} players requested but the arena has only {available} spawn points")]
    TooManyPlayers { requested: usize, available: usize },

    #[error("Unknown combatant: {0:?}")]
    UnknownCombatant(crate::enums::CombatantId),

    #[error("Damage and heal amounts must be positive and finite, got {0}")]
    InvalidAmount(f32),
}
