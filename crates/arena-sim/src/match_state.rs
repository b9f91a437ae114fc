//! Match data model: round counter, clock and the player slot table.
//!
//! Stored in `MatchEngine`, not as ECS entities.

use arena_core::enums::MatchPhase;

/// State of the match currently running (or the idle menu).
#[derive(Debug, Clone, Default)]
pub struct MatchState {
    pub phase: MatchPhase,
    /// Time left on the current phase's wait (seconds).
    pub phase_remaining_secs: f64,
    /// Rounds started this match (the first round is 1).
    pub round: u32,
    /// Scene time at which the match started.
    pub started_at_secs: f64,
    pub time_up: bool,
    pub match_winner: Option<usize>,
    /// Match time at the end of the last finished round. The game-over
    /// message and the match-end event both report this value.
    pub last_round_elapsed_secs: f64,
    /// Player tank entity for each slot.
    pub slots: Vec<hecs::Entity>,
}

impl MatchState {
    /// Seconds since the match started.
    pub fn elapsed_secs(&self, now_secs: f64) -> f64 {
        (now_secs - self.started_at_secs).max(0.0)
    }

    /// Whether the match is over and should not loop into another round.
    pub fn is_decided(&self) -> bool {
        self.match_winner.is_some() || self.time_up
    }
}

/// Result of one round. Consumed right after it is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    /// Winning slot; `None` on a draw or time-up.
    pub winner: Option<usize>,
    pub elapsed_secs: f64,
}
