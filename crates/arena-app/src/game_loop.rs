//! Game loop thread: runs the match engine at 30Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via an `mpsc` channel. The latest snapshot is stored in
//! shared state for polling. The session ends when the match reloads the
//! initial scene, the tick limit is hit, or the host shuts the loop down.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::{debug, info};

use arena_core::commands::MatchCommand;
use arena_core::constants::TICK_RATE;
use arena_sim::MatchEngine;

use crate::sinks::{LogCamera, LogDisplay, LogSceneLoader};
use crate::skirmish::Skirmish;
use crate::state::{GameLoopCommand, LoopSettings, MatchSummary, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle yielding the session summary.
pub fn spawn_game_loop(
    settings: LoopSettings,
    latest_snapshot: SharedSnapshot,
) -> anyhow::Result<(
    mpsc::Sender<GameLoopCommand>,
    JoinHandle<anyhow::Result<MatchSummary>>,
)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || run_game_loop(settings, cmd_rx, &latest_snapshot))
        .context("Failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the session ends or the channel disconnects.
pub fn run_game_loop(
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> anyhow::Result<MatchSummary> {
    let mut engine = MatchEngine::builder()
        .config(settings.config)
        .layout(settings.layout)
        .message_display(LogDisplay::new("message"))
        .timer_display(LogDisplay::quiet("timer"))
        .camera(LogCamera::default())
        .scene_loader(LogSceneLoader::default())
        .build()
        .context("Failed to set up the match engine")?;

    let mut skirmish = settings.skirmish_seed.map(Skirmish::new);
    let mut summary = MatchSummary::default();
    let mut next_tick_time = Instant::now();

    engine.queue_command(MatchCommand::StartMatch {
        players: settings.players,
    });

    while summary.ticks < settings.max_ticks {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Command(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    info!(ticks = summary.ticks, "Game loop shut down");
                    return Ok(summary);
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(summary),
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();
        summary.ticks += 1;
        summary.record(&snapshot.events);

        // 3. Let the skirmish react to what just happened
        if let Some(skirmish) = skirmish.as_mut() {
            engine.queue_commands(skirmish.next_commands(&snapshot));
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if summary.completed {
            info!(ticks = summary.ticks, "Match complete");
            return Ok(summary);
        }

        // 5. Sleep until next tick
        if settings.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }

    debug!(max_ticks = settings.max_ticks, "Tick limit reached");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use arena_core::config::{ArenaLayout, MatchConfig, PlayerConfig};
    use arena_core::enums::{CombatantId, MatchPhase};
    use arena_core::types::TankColor;

    fn settings(max_ticks: u64) -> LoopSettings {
        LoopSettings {
            config: MatchConfig {
                rounds_to_win: 1,
                start_delay_secs: 0.5,
                end_delay_secs: 0.5,
                post_match_delay_secs: 0.5,
                ..MatchConfig::default()
            },
            layout: ArenaLayout::default_arena(),
            players: vec![
                PlayerConfig::human(TankColor::RED, 0),
                PlayerConfig::human(TankColor::BLUE, 1),
            ],
            skirmish_seed: None,
            realtime: false,
            max_ticks,
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Command(MatchCommand::ToggleShield {
            target: CombatantId::Player(0),
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Command(MatchCommand::ToggleShield { .. })
        ));
        assert!(matches!(commands[1], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_limit_stops_the_loop() {
        let (_tx, rx) = mpsc::channel::<GameLoopCommand>();
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));

        let summary = run_game_loop(settings(10), rx, &latest).unwrap();
        assert_eq!(summary.ticks, 10);
        assert!(!summary.completed);

        let snap = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snap.time.tick, 10);
        assert_eq!(snap.phase, MatchPhase::RoundStarting);
    }

    #[test]
    fn test_forwarded_kill_finishes_the_match() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));

        // Processed at the first tick, before the round even started: the
        // tank is out by the time play begins
        tx.send(GameLoopCommand::Command(MatchCommand::ApplyDamage {
            target: CombatantId::Player(1),
            amount: 100.0,
        }))
        .unwrap();

        let summary = run_game_loop(settings(1_000), rx, &latest).unwrap();
        assert!(summary.completed);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.winner, Some(0));
        assert!(!summary.time_up);
    }

    #[test]
    fn test_shutdown_before_first_tick() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let summary = run_game_loop(settings(100), rx, &latest).unwrap();
        assert_eq!(summary.ticks, 0);
        assert!(latest.lock().unwrap().is_none());
    }

    #[test]
    fn test_spawned_skirmish_runs_to_completion() {
        let mut settings = settings(100_000);
        settings.skirmish_seed = Some(2024);
        for player in &mut settings.players {
            player.is_computer = true;
        }
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));

        let (_tx, handle) = spawn_game_loop(settings, latest.clone()).unwrap();
        let summary = handle.join().unwrap().unwrap();
        assert!(summary.completed);
        assert!(summary.rounds >= 1);
    }

    #[test]
    fn test_tick_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
