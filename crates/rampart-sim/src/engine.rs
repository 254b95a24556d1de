//! Simulation engine: the frame driver for the whole battlefield.
//!
//! `SimulationEngine` owns every entity collection, processes player
//! commands, runs all systems once per frame, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use log::{info, warn};

use rampart_core::commands::PlayerCommand;
use rampart_core::config::Presets;
use rampart_core::draw::DrawSurface;
use rampart_core::enums::{GamePhase, ScenarioId, SplashPolicy};
use rampart_core::error::{CommandError, ConfigError};
use rampart_core::events::GameEvent;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::{BaseId, DefenseAreaId, FrameClock, Vec2, WallId};

use crate::battlefield::{Battlefield, IdAllocator};
use crate::economy::{ScoreState, Treasury};
use crate::scenario::Scenario;
use crate::systems;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub scenario: Scenario,
    /// Overrides the scenario's splash policy when set.
    pub splash_policy: Option<SplashPolicy>,
}

impl SimConfig {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            splash_policy: None,
        }
    }

    pub fn builtin(id: ScenarioId) -> Result<Self, ConfigError> {
        Ok(Self::new(Scenario::builtin(id)?))
    }
}

/// Successful result of a player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    BasePlaced(BaseId),
    ModuleAttached(BaseId),
    WallPlaced(WallId),
    PhaseChanged(GamePhase),
    /// Command was valid but had nothing to do (e.g. Resume while Active).
    Unchanged,
}

/// The simulation engine. Owns the battlefield and all sim state.
pub struct SimulationEngine {
    battlefield: Battlefield,
    ids: IdAllocator,
    clock: FrameClock,
    phase: GamePhase,
    splash_policy: SplashPolicy,
    presets: Presets,
    schedule: WaveSchedule,
    primary_area: DefenseAreaId,
    treasury: Treasury,
    score: ScoreState,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create an engine with the scenario's world in place, in `Setup` phase.
    pub fn new(config: SimConfig) -> Self {
        let SimConfig {
            scenario,
            splash_policy,
        } = config;

        let mut battlefield = Battlefield::default();
        let mut ids = IdAllocator::default();
        world_setup::setup_scenario(&mut battlefield, &mut ids, &scenario);
        let primary_area = scenario.target_area;
        if let Some(area) = battlefield.defense_area(primary_area) {
            info!(
                "enemies target defense area {} ({} health)",
                primary_area.0, area.health.max
            );
        }

        let score = ScoreState {
            enemies_total: scenario.schedule.total_enemies(),
            ..Default::default()
        };

        info!(
            "scenario '{}' loaded: {} path(s), {} enemies scheduled, {} gold",
            scenario.name,
            scenario.paths.len(),
            score.enemies_total,
            scenario.starting_gold
        );

        Self {
            battlefield,
            ids,
            clock: FrameClock::default(),
            phase: GamePhase::Setup,
            splash_policy: splash_policy.unwrap_or(scenario.splash_policy),
            presets: scenario.presets,
            schedule: scenario.schedule,
            primary_area,
            treasury: Treasury::new(scenario.starting_gold),
            score,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// Outside the `Active` phase only queued commands are processed.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.clock.advance();
        }

        self.snapshot_with_events()
    }

    /// Validate and apply a command immediately.
    ///
    /// A rejected command leaves the engine unchanged.
    pub fn apply_command(
        &mut self,
        command: PlayerCommand,
    ) -> Result<CommandOutcome, CommandError> {
        if self.phase.is_over() {
            return Err(CommandError::WrongPhase(self.phase));
        }

        match command {
            PlayerCommand::PlaceBase { x, y } => {
                self.treasury.spend(self.presets.base.cost)?;
                let id = world_setup::place_base(
                    &mut self.battlefield,
                    &mut self.ids,
                    &self.presets,
                    Vec2::new(x, y),
                );
                Ok(CommandOutcome::BasePlaced(id))
            }
            PlayerCommand::AttachModule { base, kind } => {
                let module = world_setup::build_module(&self.presets, kind);
                let target = self
                    .battlefield
                    .base(base)
                    .ok_or(CommandError::UnknownBase(base))?;
                if target.has_module() {
                    return Err(CommandError::ModuleSlotOccupied(base));
                }
                self.treasury.ensure(module.cost())?;

                let target = self
                    .battlefield
                    .base_mut(base)
                    .ok_or(CommandError::UnknownBase(base))?;
                let cost = module.cost();
                target.attach_module(module)?;
                self.treasury.spend(cost)?;
                Ok(CommandOutcome::ModuleAttached(base))
            }
            PlayerCommand::PlaceWall { x, y } => {
                self.treasury.spend(self.presets.wall.cost)?;
                let id = world_setup::place_wall(
                    &mut self.battlefield,
                    &mut self.ids,
                    &self.presets,
                    Vec2::new(x, y),
                );
                Ok(CommandOutcome::WallPlaced(id))
            }
            PlayerCommand::StartMission => {
                if self.phase != GamePhase::Setup {
                    return Err(CommandError::WrongPhase(self.phase));
                }
                info!("mission started");
                self.phase = GamePhase::Active;
                Ok(CommandOutcome::PhaseChanged(self.phase))
            }
            PlayerCommand::Pause => match self.phase {
                GamePhase::Active => {
                    self.phase = GamePhase::Paused;
                    Ok(CommandOutcome::PhaseChanged(self.phase))
                }
                GamePhase::Paused => Ok(CommandOutcome::Unchanged),
                other => Err(CommandError::WrongPhase(other)),
            },
            PlayerCommand::Resume => match self.phase {
                GamePhase::Paused => {
                    self.phase = GamePhase::Active;
                    Ok(CommandOutcome::PhaseChanged(self.phase))
                }
                GamePhase::Active => Ok(CommandOutcome::Unchanged),
                other => Err(CommandError::WrongPhase(other)),
            },
        }
    }

    /// Paint the current battlefield.
    pub fn render(&self, surface: &mut impl DrawSurface) {
        systems::render::draw_battlefield(&self.battlefield, surface);
    }

    /// Snapshot of the current state without advancing. Pending events are kept.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.battlefield,
            &self.clock,
            self.phase,
            self.treasury.gold(),
            self.events.clone(),
            &self.score,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current frame clock.
    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    pub fn gold(&self) -> u32 {
        self.treasury.gold()
    }

    pub fn splash_policy(&self) -> SplashPolicy {
        self.splash_policy
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a read-only reference to the battlefield.
    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    /// Mutable battlefield access for tests that stage exact positions.
    #[cfg(test)]
    pub fn battlefield_mut(&mut self) -> &mut Battlefield {
        &mut self.battlefield
    }

    /// Process all queued commands. Rejections are logged and reported as events.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command.clone()) {
                warn!("command {command:?} rejected: {err}");
                self.events.push(GameEvent::CommandRejected {
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let frame = self.clock.frame;

        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.schedule,
            frame,
            &mut self.battlefield,
            &mut self.ids,
            &self.presets,
            self.primary_area,
            &mut self.events,
            &mut self.score,
        );

        let Battlefield {
            enemies,
            walls,
            bases,
            defense_areas,
            projectiles,
            ..
        } = &mut self.battlefield;

        // 2. Weapons fire
        systems::weapons::run(bases, enemies, projectiles, &mut self.events, &mut self.score);
        // 3. Projectiles home and resolve
        systems::combat::run(projectiles, enemies, self.splash_policy, &mut self.events);
        // 4. Enemies move or attack
        systems::movement::run(enemies, walls, defense_areas);
        // 5. Cleanup (dead enemies, destroyed walls)
        let breached = systems::cleanup::run(
            &mut self.battlefield,
            &mut self.treasury,
            &mut self.score,
            &mut self.events,
        );

        // 6. Win/loss
        if breached {
            self.finish(GamePhase::Defeat);
        } else if self.schedule.is_exhausted() && self.battlefield.enemies.is_empty() {
            self.finish(GamePhase::Victory);
        }
    }

    fn finish(&mut self, phase: GamePhase) {
        info!("game over at frame {}: {:?}", self.clock.frame, phase);
        self.phase = phase;
        self.events.push(GameEvent::GameOver { phase });
    }

    fn snapshot_with_events(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.battlefield,
            &self.clock,
            self.phase,
            self.treasury.gold(),
            events,
            &self.score,
        )
    }
}
