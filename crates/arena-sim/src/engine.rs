//! Match engine, the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world and the match state, processes
//! commands, runs all systems, and produces `MatchSnapshot`s. Completely
//! headless: everything visible goes through the injected collaborators.

use std::collections::VecDeque;

use hecs::World;
use tracing::{debug, warn};

use arena_core::commands::MatchCommand;
use arena_core::components::{Active, PlayerTank};
use arena_core::config::{ArenaLayout, MatchConfig, PlayerConfig};
use arena_core::constants::DT;
use arena_core::enums::{CombatantId, DamageOutcome, MatchPhase};
use arena_core::error::{MatchError, SetupError};
use arena_core::events::MatchEvent;
use arena_core::state::MatchSnapshot;
use arena_core::types::{SimTime, Transform};

use crate::match_state::MatchState;
use crate::sinks::{CameraRig, Collaborators, Presenter, SceneLoader, TextDisplay};
use crate::systems;
use crate::systems::round::{RoundContext, RoundSignal};
use crate::world_setup;

/// Builds a [`MatchEngine`], refusing to do so while any collaborator is missing.
pub struct MatchEngineBuilder {
    config: MatchConfig,
    layout: ArenaLayout,
    message: Option<Box<dyn TextDisplay>>,
    timer: Option<Box<dyn TextDisplay>>,
    camera: Option<Box<dyn CameraRig>>,
    scene: Option<Box<dyn SceneLoader>>,
}

impl Default for MatchEngineBuilder {
    fn default() -> Self {
        Self {
            config: MatchConfig::default(),
            layout: ArenaLayout::default_arena(),
            message: None,
            timer: None,
            camera: None,
            scene: None,
        }
    }
}

impl MatchEngineBuilder {
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn layout(mut self, layout: ArenaLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn message_display(mut self, display: impl TextDisplay + 'static) -> Self {
        self.message = Some(Box::new(display));
        self
    }

    pub fn timer_display(mut self, display: impl TextDisplay + 'static) -> Self {
        self.timer = Some(Box::new(display));
        self
    }

    pub fn camera(mut self, camera: impl CameraRig + 'static) -> Self {
        self.camera = Some(Box::new(camera));
        self
    }

    pub fn scene_loader(mut self, scene: impl SceneLoader + 'static) -> Self {
        self.scene = Some(Box::new(scene));
        self
    }

    pub fn build(self) -> Result<MatchEngine, SetupError> {
        self.config.validate()?;
        if self.layout.spawn_points.is_empty() {
            return Err(SetupError::NoSpawnPoints);
        }

        let sinks = Collaborators {
            message: self
                .message
                .ok_or(SetupError::MissingCollaborator("message display"))?,
            timer: self
                .timer
                .ok_or(SetupError::MissingCollaborator("timer display"))?,
            camera: self
                .camera
                .ok_or(SetupError::MissingCollaborator("camera rig"))?,
            scene: self
                .scene
                .ok_or(SetupError::MissingCollaborator("scene loader"))?,
        };

        let mut engine = MatchEngine {
            world: World::new(),
            time: SimTime::default(),
            config: self.config,
            layout: self.layout,
            state: MatchState::default(),
            presenter: Presenter::new(sinks),
            enemies: Vec::new(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        };
        engine.load_scene();
        Ok(engine)
    }
}

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    world: World,
    time: SimTime,
    config: MatchConfig,
    layout: ArenaLayout,
    state: MatchState,
    presenter: Presenter,
    /// Enemy entities, indexed by enemy id.
    enemies: Vec<hecs::Entity>,
    command_queue: VecDeque<MatchCommand>,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    pub fn builder() -> MatchEngineBuilder {
        MatchEngineBuilder::default()
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MatchCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = MatchCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one fixed tick and return the resulting snapshot.
    pub fn tick(&mut self) -> MatchSnapshot {
        self.tick_for(DT)
    }

    /// Advance the scene clock by `dt` seconds and run every system once.
    ///
    /// The scene clock never runs backwards: a negative or non-finite `dt`
    /// is logged and the tick runs with a zero step.
    pub fn tick_for(&mut self, dt: f64) -> MatchSnapshot {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!(dt, tick = self.time.tick, "Invalid tick step, using zero");
            0.0
        };

        self.process_commands();
        self.time.advance(dt);
        self.run_systems(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.state,
            &self.presenter,
            events,
        )
    }

    /// Leave the menu and start a match. Player `i` spawns at spawn point `i`.
    pub fn start_match(&mut self, players: Vec<PlayerConfig>) -> Result<(), MatchError> {
        if self.state.phase != MatchPhase::MainMenu {
            return Err(MatchError::AlreadyRunning);
        }
        if players.is_empty() {
            return Err(MatchError::NoPlayers);
        }
        let available = self.layout.spawn_points.len();
        if players.len() > available {
            return Err(MatchError::TooManyPlayers {
                requested: players.len(),
                available,
            });
        }

        let slots = world_setup::spawn_players(
            &mut self.world,
            &self.layout,
            &players,
            self.config.starting_health,
        );

        self.state = MatchState {
            started_at_secs: self.time.elapsed_secs,
            slots,
            ..MatchState::default()
        };

        let mut ctx = RoundContext {
            world: &mut self.world,
            state: &mut self.state,
            config: &self.config,
            layout: &self.layout,
            presenter: &mut self.presenter,
            events: &mut self.events,
            now_secs: self.time.elapsed_secs,
        };
        systems::round::begin_match(&mut ctx);
        Ok(())
    }

    /// Apply a hit from the combat system.
    pub fn apply_damage(
        &mut self,
        target: CombatantId,
        amount: f32,
    ) -> Result<DamageOutcome, MatchError> {
        check_amount(amount)?;
        let entity = self.resolve(target)?;
        systems::damage::apply_damage(&mut self.world, entity, target, amount, &mut self.events)
            .ok_or(MatchError::UnknownCombatant(target))
    }

    pub fn heal(&mut self, target: CombatantId, amount: f32) -> Result<(), MatchError> {
        check_amount(amount)?;
        let entity = self.resolve(target)?;
        systems::damage::with_health(&mut self.world, entity, |health| health.heal(amount))
            .ok_or(MatchError::UnknownCombatant(target))
    }

    pub fn toggle_shield(&mut self, target: CombatantId) -> Result<(), MatchError> {
        let entity = self.resolve(target)?;
        systems::damage::with_health(&mut self.world, entity, |health| health.toggle_shield())
            .ok_or(MatchError::UnknownCombatant(target))
    }

    pub fn toggle_invincibility(&mut self, target: CombatantId) -> Result<(), MatchError> {
        let entity = self.resolve(target)?;
        systems::damage::with_health(&mut self.world, entity, |health| {
            health.toggle_invincibility()
        })
        .ok_or(MatchError::UnknownCombatant(target))
    }

    /// Apply movement input to a player tank. Returns `false` when the input
    /// was dropped because controls are locked or the tank is out.
    pub fn move_player(&mut self, slot: usize, transform: Transform) -> Result<bool, MatchError> {
        let entity = self.resolve(CombatantId::Player(slot))?;
        let (tank, current, active) = self
            .world
            .query_one_mut::<(&PlayerTank, &mut Transform, &Active)>(entity)
            .map_err(|_| MatchError::UnknownCombatant(CombatantId::Player(slot)))?;

        if !tank.control_enabled || !active.0 {
            return Ok(false);
        }
        *current = transform;
        Ok(true)
    }

    /// Get the current match phase.
    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// Get the current scene time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Rounds started in the current match.
    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn resolve(&self, target: CombatantId) -> Result<hecs::Entity, MatchError> {
        let entity = match target {
            CombatantId::Player(slot) => self.state.slots.get(slot),
            CombatantId::Enemy(id) => self.enemies.get(id as usize),
        };
        entity.copied().ok_or(MatchError::UnknownCombatant(target))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Rejected commands are logged and dropped.
    fn handle_command(&mut self, command: MatchCommand) {
        let result = match command {
            MatchCommand::StartMatch { players } => self.start_match(players),
            MatchCommand::ApplyDamage { target, amount } => {
                self.apply_damage(target, amount).map(|_| ())
            }
            MatchCommand::Heal { target, amount } => self.heal(target, amount),
            MatchCommand::ToggleShield { target } => self.toggle_shield(target),
            MatchCommand::ToggleInvincibility { target } => self.toggle_invincibility(target),
            MatchCommand::MovePlayer {
                slot,
                position,
                rotation,
            } => self
                .move_player(slot, Transform::new(position, rotation))
                .map(|applied| {
                    if !applied {
                        debug!(slot, "Movement input dropped while controls are locked");
                    }
                }),
        };

        if let Err(err) = result {
            warn!(error = %err, "Command rejected");
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Enemy AI
        systems::enemy_ai::run(&mut self.world, &self.config.enemy, dt as f32, &mut self.events);
        // 2. Countdown display
        systems::timer::run(
            &self.state,
            &self.config,
            self.time.elapsed_secs,
            &mut self.presenter,
        );
        // 3. Round state machine
        let mut ctx = RoundContext {
            world: &mut self.world,
            state: &mut self.state,
            config: &self.config,
            layout: &self.layout,
            presenter: &mut self.presenter,
            events: &mut self.events,
            now_secs: self.time.elapsed_secs,
        };
        if systems::round::run(&mut ctx, dt) == RoundSignal::ReloadScene {
            self.reload_scene();
        }
    }

    /// Populate a fresh scene: enemies only, players spawn with the match.
    fn load_scene(&mut self) {
        self.enemies =
            world_setup::spawn_enemies(&mut self.world, &self.layout, self.config.starting_health);
        self.presenter.show_message("");
    }

    /// Throw away everything and start over from the menu.
    fn reload_scene(&mut self) {
        self.world.clear();
        self.state = MatchState::default();
        self.presenter.show_timer("");
        self.load_scene();
        self.events.push(MatchEvent::SceneReloaded);
    }
}

fn check_amount(amount: f32) -> Result<(), MatchError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(MatchError::InvalidAmount(amount))
    }
}
