//! tank-arena: runs a headless match and prints the summary as JSON.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arena_app::game_loop;
use arena_app::state::{LoopSettings, SharedSnapshot};
use arena_core::config::{ArenaLayout, MatchConfig, PlayerConfig};
use arena_core::types::TankColor;

/// Player colors, by slot.
const PALETTE: [TankColor; 4] = [
    TankColor::RED,
    TankColor::BLUE,
    TankColor::GREEN,
    TankColor::YELLOW,
];

/// Tank arena - headless match runner
#[derive(Parser, Debug)]
#[command(name = "tank-arena")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Match configuration (JSON). Missing fields use defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Arena layout (JSON). Defaults to the four-corner arena.
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Number of tanks (1-4)
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Skirmish seed (default: 1). Pass --idle to leave the tanks alone.
    #[arg(short, long, default_value = "1")]
    seed: u64,

    /// Do not drive the tanks; the match can only end on time
    #[arg(long)]
    idle: bool,

    /// Pace ticks at 30Hz wall-clock speed
    #[arg(long)]
    realtime: bool,

    /// Stop after this many ticks
    #[arg(long, default_value = "100000")]
    max_ticks: u64,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = match &args.config {
        Some(path) => MatchConfig::from_json_str(&read(path)?)
            .with_context(|| format!("Invalid match config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    let layout = match &args.layout {
        Some(path) => ArenaLayout::from_json_str(&read(path)?)
            .with_context(|| format!("Invalid arena layout {}", path.display()))?,
        None => ArenaLayout::default_arena(),
    };

    if args.players == 0 || args.players > PALETTE.len() {
        bail!("--players must be between 1 and {}", PALETTE.len());
    }
    let players: Vec<PlayerConfig> = PALETTE
        .iter()
        .take(args.players)
        .enumerate()
        .map(|(slot, &color)| PlayerConfig {
            is_computer: !args.idle,
            color,
            control_index: slot as i32,
        })
        .collect();

    info!(
        players = players.len(),
        rounds_to_win = config.rounds_to_win,
        seed = args.seed,
        "Starting tank arena"
    );

    let settings = LoopSettings {
        config,
        layout,
        players,
        skirmish_seed: (!args.idle).then_some(args.seed),
        realtime: args.realtime,
        max_ticks: args.max_ticks,
    };
    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let (_cmd_tx, handle) = game_loop::spawn_game_loop(settings, latest)?;

    let summary = handle
        .join()
        .map_err(|_| anyhow::anyhow!("Game loop thread panicked"))??;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Initialize tracing/logging
fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
