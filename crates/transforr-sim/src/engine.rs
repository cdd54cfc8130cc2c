//! Simulation engine: the orchestrator of a run.
//!
//! `SimulationEngine` owns the hecs ECS world, the player, score and lives,
//! processes host commands, runs all systems in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use transforr_core::commands::{HostCommand, InputFrame};
use transforr_core::components::{Boss, Particle};
use transforr_core::constants::*;
use transforr_core::enums::GamePhase;
use transforr_core::error::{LevelDiagnostic, LevelError};
use transforr_core::events::GameEvent;
use transforr_core::state::GameStateSnapshot;
use transforr_core::types::SimTime;

use crate::level::{self, Camera};
use crate::levels;
use crate::player::Player;
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::transform::Transformer;
use crate::world_setup;

/// Configuration for a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed of the gameplay RNG. Same seed and inputs = same simulation.
    pub seed: u64,
    /// Seed of the cosmetic (particle) RNG.
    pub cosmetic_seed: u64,
    /// Lives granted at the start of every run.
    pub starting_lives: u32,
    /// Level a host starts its first run on.
    pub start_level: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            cosmetic_seed: 7,
            starting_lives: STARTING_LIVES,
            start_level: 0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    /// Phase to return to when a pause ends.
    resume_phase: GamePhase,
    rng: ChaCha8Rng,
    cosmetic_rng: ChaCha8Rng,
    command_queue: VecDeque<HostCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,

    levels: Vec<Vec<String>>,
    level: usize,
    player: Player,
    transformer: Transformer,
    camera: Camera,
    particles: Vec<Particle>,
    diagnostics: Vec<LevelDiagnostic>,

    score: i64,
    lives: u32,
    starting_lives: u32,
}

impl SimulationEngine {
    /// Create an engine that plays the built-in levels.
    pub fn new(config: SimConfig) -> Self {
        Self::with_levels(config, levels::builtin())
    }

    /// Create an engine over a custom level list.
    pub fn with_levels(config: SimConfig, levels: Vec<Vec<String>>) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            resume_phase: GamePhase::Playing,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            cosmetic_rng: ChaCha8Rng::seed_from_u64(config.cosmetic_seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            levels,
            level: 0,
            player: Player::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            transformer: Transformer::default(),
            camera: Camera::default(),
            particles: Vec::new(),
            diagnostics: Vec::new(),
            score: 0,
            lives: config.starting_lives,
            starting_lives: config.starting_lives,
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputFrame) -> GameStateSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Playing => {
                self.step_playing(input);
                self.time.advance();
            }
            GamePhase::Transforming => {
                if input.pause {
                    self.pause();
                } else {
                    self.step_transforming();
                    self.time.advance();
                }
            }
            GamePhase::Paused => {
                if input.pause {
                    self.resume();
                }
            }
            _ => {}
        }

        self.snapshot()
    }

    /// Start a fresh run (score 0, full lives) on the given level.
    pub fn start_run(&mut self, level: usize) -> Result<(), LevelError> {
        self.load_level(level)?;
        self.score = 0;
        self.lives = self.starting_lives;
        info!(level, lives = self.lives, "run started");
        Ok(())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Index of the current level.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn scroll_x(&self) -> f64 {
        self.camera.scroll_x
    }

    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::StartRun { level } => {
                if let Err(err) = self.start_run(level) {
                    warn!(%err, "start run rejected");
                }
            }
            HostCommand::RespawnInPlace => {
                if matches!(
                    self.phase,
                    GamePhase::Playing
                        | GamePhase::Transforming
                        | GamePhase::Paused
                        | GamePhase::LevelComplete
                ) {
                    self.reset_level();
                }
            }
            HostCommand::AdvanceLevel => {
                if self.phase == GamePhase::LevelComplete {
                    self.advance_level();
                }
            }
            HostCommand::ReturnToMenu => {
                self.world.clear();
                self.particles.clear();
                self.transformer.reset();
                self.phase = GamePhase::Menu;
                info!("returned to menu");
            }
            HostCommand::Pause => {
                if matches!(self.phase, GamePhase::Playing | GamePhase::Transforming) {
                    self.pause();
                }
            }
            HostCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.resume();
                }
            }
        }
    }

    fn pause(&mut self) {
        self.resume_phase = self.phase;
        self.phase = GamePhase::Paused;
        debug!("paused");
    }

    fn resume(&mut self) {
        self.phase = self.resume_phase;
        debug!(phase = ?self.phase, "resumed");
    }

    /// One tick of a running transformation; the world stays frozen.
    fn step_transforming(&mut self) {
        let solids = systems::platforms::solids(&self.world);
        if let Some(mode) = self.transformer.advance(&mut self.player, &solids) {
            self.events.push(GameEvent::TransformCompleted { mode });
            self.phase = GamePhase::Playing;
        }
    }

    /// One tick of play: player, projectiles, enemies, boss, collisions,
    /// then the level (camera, platforms, particles, hazards, power-ups, goal).
    fn step_playing(&mut self, input: &InputFrame) {
        if input.pause {
            self.pause();
            return;
        }

        let solids = systems::platforms::solids(&self.world);
        if input.transform && self.transformer.try_start(&self.player, &solids) {
            self.events.push(GameEvent::TransformStarted {
                from: self.player.mode,
            });
            self.phase = GamePhase::Transforming;
            return;
        }

        // 1. Player
        self.player.update(input, &solids, self.camera.scroll_x);
        if self.player.dead {
            self.lose_life();
            return;
        }
        if input.fire {
            if let Some((body, projectile)) = self.player.shoot() {
                self.world.spawn((projectile, body));
                self.score += SCORE_SHOT_FIRED;
                self.events.push(GameEvent::ShotFired {
                    power: self.player.weapon_power,
                });
            }
        }

        // 2. Projectiles
        systems::projectiles::run(
            &mut self.world,
            self.camera.scroll_x,
            &mut self.particles,
            &mut self.cosmetic_rng,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // 3. Enemies (a block may have broken, so gather solids again)
        let solids = systems::platforms::solids(&self.world);
        systems::enemy_ai::run(&mut self.world, self.player.rect(), &solids, &mut self.events);

        // 4. Boss
        systems::boss::run(
            &mut self.world,
            self.player.rect().center(),
            &mut self.rng,
            &mut self.events,
        );

        // 5. Collisions
        systems::collision::run(
            &mut self.world,
            &mut self.player,
            &mut self.score,
            &mut self.particles,
            &mut self.cosmetic_rng,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // 6. Level
        self.camera.follow(self.player.rect().center_x());
        systems::platforms::run(&mut self.world);
        systems::particles::run(&mut self.particles);
        systems::hazards::run(
            &mut self.world,
            &mut self.player,
            &mut self.rng,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::pickups::run(
            &mut self.world,
            &mut self.player,
            &mut self.particles,
            &mut self.cosmetic_rng,
            &mut self.events,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        if self.player.health <= 0 {
            self.lose_life();
        } else if self.goal_reached() {
            self.complete_level();
        }
    }

    /// The player is past the goal line and no boss stands in the way.
    fn goal_reached(&self) -> bool {
        if self.player.rect().center_x() < level::goal_x() {
            return false;
        }
        let mut bosses = self.world.query::<&Boss>();
        let alive = bosses.iter().any(|(_, boss)| boss.health > 0);
        !alive
    }

    fn complete_level(&mut self) {
        let bonus = SCORE_LEVEL_BONUS * (self.level as i64 + 1);
        self.score += bonus;
        self.phase = GamePhase::LevelComplete;
        self.events.push(GameEvent::LevelComplete {
            level: self.level,
            bonus,
        });
        info!(level = self.level, bonus, score = self.score, "level complete");
    }

    fn advance_level(&mut self) {
        let next = self.level + 1;
        if next >= self.levels.len() {
            self.phase = GamePhase::MissionComplete;
            self.events.push(GameEvent::MissionComplete { score: self.score });
            info!(score = self.score, "mission complete");
            return;
        }
        if let Err(err) = self.load_level(next) {
            warn!(%err, "could not load next level");
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost {
            lives_left: self.lives,
        });
        info!(lives_left = self.lives, level = self.level, "life lost");

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score: self.score });
            info!(score = self.score, "game over");
        } else {
            self.reset_level();
        }
    }

    /// Rebuild the current level from its grid.
    fn reset_level(&mut self) {
        if let Err(err) = self.load_level(self.level) {
            warn!(%err, "level reset failed, returning to menu");
            self.world.clear();
            self.phase = GamePhase::Menu;
        }
    }

    /// Tear down the world and build level `index` from its grid. Player,
    /// projectiles, particles, camera and any transformation start fresh.
    fn load_level(&mut self, index: usize) -> Result<(), LevelError> {
        let rows = self.levels.get(index).ok_or(LevelError::UnknownLevel {
            index,
            available: self.levels.len(),
        })?;
        let layout = level::build(index, rows)?;

        self.world.clear();
        world_setup::populate(
            &mut self.world,
            &layout,
            &mut self.rng,
            &mut self.cosmetic_rng,
        );

        self.level = index;
        self.player = Player::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        self.transformer.reset();
        self.camera = Camera::default();
        self.particles.clear();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::LevelStarted { level: index });
        info!(
            level = index,
            spawns = layout.spawns.len(),
            boss = layout.has_boss(),
            "level started"
        );
        self.diagnostics = layout.diagnostics;
        Ok(())
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        let ctx = SnapshotContext {
            time: self.time,
            phase: self.phase,
            level: self.level,
            player: &self.player,
            transform_progress: self.transformer.progress(),
            particles: &self.particles,
            scroll_x: self.camera.scroll_x,
            goal_x: level::goal_x(),
            score: self.score,
            lives: self.lives,
            diagnostics: &self.diagnostics,
        };
        systems::snapshot::build_snapshot(&self.world, &ctx, events)
    }
}
