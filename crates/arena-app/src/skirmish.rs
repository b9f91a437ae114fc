//! Skirmish driver: stands in for the combat and input layers.
//!
//! Reads each snapshot and produces seeded, reproducible commands for the
//! computer-driven tanks: they drift around, fire on any other live tank
//! and now and then heal or raise a shield. Human tanks are left alone.

use glam::Vec3;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use arena_core::commands::MatchCommand;
use arena_core::enums::{CombatantId, MatchPhase};
use arena_core::state::{MatchSnapshot, PlayerView};

/// Chance per tick that some tank lands a shot.
const SHOT_CHANCE: f64 = 0.08;
const SHELL_DAMAGE_MIN: f32 = 10.0;
const SHELL_DAMAGE_MAX: f32 = 35.0;
const HEAL_CHANCE: f64 = 0.01;
const HEAL_AMOUNT: f32 = 15.0;
const SHIELD_CHANCE: f64 = 0.004;
/// Largest per-tick drift of a tank (meters).
const MAX_DRIFT: f32 = 0.2;

pub struct Skirmish {
    rng: ChaCha8Rng,
}

impl Skirmish {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Commands for the next tick, given the last snapshot.
    pub fn next_commands(&mut self, snapshot: &MatchSnapshot) -> Vec<MatchCommand> {
        if snapshot.phase != MatchPhase::RoundPlaying {
            return Vec::new();
        }

        let live: Vec<&PlayerView> = snapshot
            .players
            .iter()
            .filter(|p| p.active && p.control_enabled)
            .collect();
        let bots: Vec<&PlayerView> = live.iter().copied().filter(|p| p.is_computer).collect();
        let mut commands = Vec::new();

        for player in &bots {
            let drift = Vec3::new(
                self.rng.gen_range(-MAX_DRIFT..=MAX_DRIFT),
                0.0,
                self.rng.gen_range(-MAX_DRIFT..=MAX_DRIFT),
            );
            commands.push(MatchCommand::MovePlayer {
                slot: player.slot,
                position: player.transform.position + drift,
                rotation: player.transform.rotation,
            });
        }

        if live.len() >= 2 && !bots.is_empty() && self.rng.gen_bool(SHOT_CHANCE) {
            let shooter = bots.choose(&mut self.rng).map(|p| p.slot);
            let targets: Vec<usize> = live
                .iter()
                .map(|p| p.slot)
                .filter(|&slot| Some(slot) != shooter)
                .collect();
            if let Some(&slot) = targets.choose(&mut self.rng) {
                commands.push(MatchCommand::ApplyDamage {
                    target: CombatantId::Player(slot),
                    amount: self.rng.gen_range(SHELL_DAMAGE_MIN..SHELL_DAMAGE_MAX),
                });
            }
        }

        if self.rng.gen_bool(HEAL_CHANCE) {
            if let Some(player) = bots.choose(&mut self.rng) {
                commands.push(MatchCommand::Heal {
                    target: CombatantId::Player(player.slot),
                    amount: HEAL_AMOUNT,
                });
            }
        }

        if self.rng.gen_bool(SHIELD_CHANCE) {
            if let Some(player) = bots.iter().find(|p| !p.health.shielded) {
                commands.push(MatchCommand::ToggleShield {
                    target: CombatantId::Player(player.slot),
                });
            }
        }

        commands
    }
}
