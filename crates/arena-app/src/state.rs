//! State shared between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use arena_core::commands::MatchCommand;
use arena_core::config::{ArenaLayout, MatchConfig, PlayerConfig};
use arena_core::events::MatchEvent;
use arena_core::state::MatchSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A match command to forward to the engine.
    Command(MatchCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<MatchSnapshot>>>;

/// Everything the game loop needs to set up one session.
#[derive(Debug, Clone)]
pub struct LoopSettings {
    pub config: MatchConfig,
    pub layout: ArenaLayout,
    pub players: Vec<PlayerConfig>,
    /// Seed for the skirmish driver. `None` leaves the players idle.
    pub skirmish_seed: Option<u64>,
    /// Pace ticks at wall-clock speed instead of running flat out.
    pub realtime: bool,
    /// Hard stop, in ticks.
    pub max_ticks: u64,
}

/// What happened during a game loop session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSummary {
    pub ticks: u64,
    pub rounds: u32,
    pub winner: Option<usize>,
    pub time_up: bool,
    pub match_elapsed_secs: f64,
    /// The match reached its post-match reload.
    pub completed: bool,
}

impl MatchSummary {
    /// Fold one tick's events into the summary.
    pub fn record(&mut self, events: &[MatchEvent]) {
        for event in events {
            match event {
                MatchEvent::RoundStarted { round } => self.rounds = *round,
                MatchEvent::TimeUp => self.time_up = true,
                MatchEvent::MatchEnded {
                    winner,
                    elapsed_secs,
                } => {
                    self.winner = *winner;
                    self.match_elapsed_secs = *elapsed_secs;
                }
                MatchEvent::SceneReloaded => self.completed = true,
                _ => {}
            }
        }
    }
}
