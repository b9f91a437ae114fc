//! Round state machine (the match loop).
//!
//! Each phase that waits (round start, round end, post-match hold) keeps a
//! countdown in `MatchState::phase_remaining_secs`; the single engine tick
//! counts it down and moves to the next phase when it runs out.
//!
//! ```text
//! MainMenu -> RoundStarting -> RoundPlaying -> RoundEnding -+-> RoundStarting
//!                                                           +-> MatchOver -> MainMenu
//! ```

use hecs::World;
use tracing::info;

use arena_core::components::{Active, PlayerTank};
use arena_core::config::{ArenaLayout, MatchConfig};
use arena_core::constants::TIME_UP_MESSAGE;
use arena_core::enums::{CombatantId, MatchPhase};
use arena_core::events::MatchEvent;

use crate::match_state::{MatchState, RoundOutcome};
use crate::messages::{self, Tally};
use crate::sinks::Presenter;
use crate::world_setup;

/// Slack when comparing a countdown against zero, absorbing float drift.
const WAIT_EPSILON_SECS: f64 = 1e-6;

/// Everything the round machine reads and writes during one tick.
pub struct RoundContext<'a> {
    pub world: &'a mut World,
    pub state: &'a mut MatchState,
    pub config: &'a MatchConfig,
    pub layout: &'a ArenaLayout,
    pub presenter: &'a mut Presenter,
    pub events: &'a mut Vec<MatchEvent>,
    /// Current scene time.
    pub now_secs: f64,
}

/// What the engine must do after the round machine ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundSignal {
    Continue,
    /// The post-match hold ended and the scene reload was requested.
    ReloadScene,
}

/// Kick off the first round of a freshly spawned match.
pub fn begin_match(ctx: &mut RoundContext) {
    let targets: Vec<CombatantId> = (0..ctx.state.slots.len())
        .map(CombatantId::Player)
        .collect();
    ctx.presenter.track(&targets);

    info!(players = ctx.state.slots.len(), "Match started");
    ctx.events.push(MatchEvent::MatchStarted {
        players: ctx.state.slots.len(),
    });

    enter_round_starting(ctx);
}

/// Advance the round machine by `dt` seconds.
pub fn run(ctx: &mut RoundContext, dt: f64) -> RoundSignal {
    match ctx.state.phase {
        MatchPhase::MainMenu => {}
        MatchPhase::RoundStarting => {
            if wait_elapsed(ctx.state, dt) {
                enter_round_playing(ctx);
                check_round_over(ctx);
            }
        }
        MatchPhase::RoundPlaying => check_round_over(ctx),
        MatchPhase::RoundEnding => {
            if wait_elapsed(ctx.state, dt) {
                if ctx.state.is_decided() {
                    enter_match_over(ctx);
                } else {
                    enter_round_starting(ctx);
                }
            }
        }
        MatchPhase::MatchOver => {
            if wait_elapsed(ctx.state, dt) {
                info!("Reloading initial scene");
                ctx.presenter.reload_scene();
                return RoundSignal::ReloadScene;
            }
        }
    }

    RoundSignal::Continue
}

fn wait_elapsed(state: &mut MatchState, dt: f64) -> bool {
    state.phase_remaining_secs -= dt;
    state.phase_remaining_secs <= WAIT_EPSILON_SECS
}

fn enter_round_starting(ctx: &mut RoundContext) {
    for (slot, &entity) in ctx.state.slots.iter().enumerate() {
        if let Some(spawn) = ctx.layout.spawn_points.get(slot) {
            world_setup::reset_player(ctx.world, entity, *spawn);
        }
    }
    set_control(ctx.world, false);
    ctx.presenter.snap_camera();

    ctx.state.round += 1;
    ctx.presenter.show_message(messages::round_banner(ctx.state.round));

    ctx.state.phase = MatchPhase::RoundStarting;
    ctx.state.phase_remaining_secs = ctx.config.start_delay_secs;

    info!(round = ctx.state.round, "Round starting");
    ctx.events.push(MatchEvent::RoundStarted {
        round: ctx.state.round,
    });
}

fn enter_round_playing(ctx: &mut RoundContext) {
    set_control(ctx.world, true);
    ctx.presenter.show_message("");
    ctx.state.phase = MatchPhase::RoundPlaying;
    ctx.state.phase_remaining_secs = 0.0;
}

/// Elimination is checked before the clock.
fn check_round_over(ctx: &mut RoundContext) {
    if active_players(ctx.world, &ctx.state.slots) <= 1 {
        enter_round_ending(ctx);
        return;
    }

    let elapsed = ctx.state.elapsed_secs(ctx.now_secs);
    if elapsed >= ctx.config.max_match_secs {
        ctx.state.time_up = true;
        ctx.presenter.show_message(TIME_UP_MESSAGE);
        info!(elapsed_secs = elapsed, "Match time is up");
        ctx.events.push(MatchEvent::TimeUp);
        enter_round_ending(ctx);
    }
}

fn enter_round_ending(ctx: &mut RoundContext) {
    set_control(ctx.world, false);

    let outcome = RoundOutcome {
        winner: if ctx.state.time_up {
            None
        } else {
            round_winner(ctx.world, &ctx.state.slots)
        },
        elapsed_secs: ctx.state.elapsed_secs(ctx.now_secs),
    };

    if !ctx.state.time_up {
        if let Some(slot) = outcome.winner {
            add_win(ctx.world, ctx.state.slots[slot]);
        }
        ctx.state.match_winner =
            match_winner(ctx.world, &ctx.state.slots, ctx.config.rounds_to_win);

        let tallies = tallies(ctx.world, &ctx.state.slots);
        ctx.presenter.show_message(messages::end_message(
            &tallies,
            outcome.winner,
            ctx.state.match_winner,
            outcome.elapsed_secs,
        ));
    }

    ctx.state.last_round_elapsed_secs = outcome.elapsed_secs;

    info!(round = ctx.state.round, winner = ?outcome.winner, "Round ended");
    ctx.events.push(MatchEvent::RoundEnded {
        round: ctx.state.round,
        winner: outcome.winner,
    });

    ctx.state.phase = MatchPhase::RoundEnding;
    ctx.state.phase_remaining_secs = ctx.config.end_delay_secs;
}

fn enter_match_over(ctx: &mut RoundContext) {
    let elapsed = ctx.state.last_round_elapsed_secs;
    info!(winner = ?ctx.state.match_winner, elapsed_secs = elapsed, "Match ended");
    ctx.events.push(MatchEvent::MatchEnded {
        winner: ctx.state.match_winner,
        elapsed_secs: elapsed,
    });

    ctx.state.phase = MatchPhase::MatchOver;
    ctx.state.phase_remaining_secs = ctx.config.post_match_delay_secs;
}

/// Number of player tanks still in play.
pub fn active_players(world: &World, slots: &[hecs::Entity]) -> usize {
    slots.iter().filter(|&&entity| is_active(world, entity)).count()
}

/// First active player in slot order.
///
/// Only meaningful once at most one tank is left.
pub fn round_winner(world: &World, slots: &[hecs::Entity]) -> Option<usize> {
    slots.iter().position(|&entity| is_active(world, entity))
}

/// First player in slot order whose tally equals the win target.
/// On a simultaneous finish the lowest slot wins.
pub fn match_winner(world: &World, slots: &[hecs::Entity], rounds_to_win: u32) -> Option<usize> {
    slots.iter().position(|&entity| {
        world
            .get::<&PlayerTank>(entity)
            .map(|tank| tank.wins == rounds_to_win)
            .unwrap_or(false)
    })
}

fn is_active(world: &World, entity: hecs::Entity) -> bool {
    world
        .get::<&Active>(entity)
        .map(|active| active.0)
        .unwrap_or(false)
}

fn add_win(world: &mut World, entity: hecs::Entity) {
    if let Ok(mut tank) = world.get::<&mut PlayerTank>(entity) {
        tank.wins += 1;
    }
}

fn set_control(world: &mut World, enabled: bool) {
    for (_entity, tank) in world.query_mut::<&mut PlayerTank>() {
        tank.control_enabled = enabled;
    }
}

fn tallies(world: &World, slots: &[hecs::Entity]) -> Vec<Tally> {
    slots
        .iter()
        .filter_map(|&entity| {
            world.get::<&PlayerTank>(entity).ok().map(|tank| Tally {
                colored_name: tank.colored_name(),
                wins: tank.wins,
            })
        })
        .collect()
}
