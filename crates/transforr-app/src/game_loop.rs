//! Game loop thread: runs the simulation engine at 60 Hz (or flat out) and
//! publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. The latest snapshot is stored in shared
//! state for polling; the loop returns a `RunSummary` when it ends.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use transforr_core::commands::{HostCommand, InputFrame};
use transforr_core::constants::TICK_RATE;
use transforr_core::enums::GamePhase;
use transforr_core::events::GameEvent;
use transforr_core::state::GameStateSnapshot;
use transforr_sim::SimulationEngine;

use crate::config::AppConfig;
use crate::error::LoopError;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// What a finished run looked like.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub phase: GamePhase,
    pub level: usize,
    pub score: i64,
    pub lives: u32,
    pub levels_completed: usize,
    pub enemies_killed: usize,
    pub lives_lost: usize,
}

impl RunSummary {
    fn record(&mut self, snapshot: &GameStateSnapshot) {
        self.ticks += 1;
        self.phase = snapshot.phase;
        self.level = snapshot.level;
        self.score = snapshot.score;
        self.lives = snapshot.lives;
        for event in &snapshot.events {
            match event {
                GameEvent::LevelComplete { .. } => self.levels_completed += 1,
                GameEvent::EnemyKilled { .. } => self.enemies_killed += 1,
                GameEvent::LifeLost { .. } => self.lives_lost += 1,
                _ => {}
            }
        }
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the handle that yields the run summary.
pub fn spawn_game_loop(
    config: AppConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunSummary>), LoopError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("transforr-game-loop".into())
        .spawn(move || run_game_loop(config, cmd_rx, &latest_snapshot))
        .map_err(LoopError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the run ends, the tick budget is spent, a
/// Shutdown command arrives or the channel disconnects.
fn run_game_loop(
    config: AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> RunSummary {
    let runner = config.runner;
    let script = config.script;
    let mut engine = SimulationEngine::new(config.sim.clone());
    engine.queue_command(HostCommand::StartRun {
        level: config.sim.start_level,
    });

    let mut summary = RunSummary::default();
    let mut held_input: Option<InputFrame> = None;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Host(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Input(input)) => held_input = Some(input),
                Ok(GameLoopCommand::ReleaseInput) => held_input = None,
                Ok(GameLoopCommand::Shutdown) => {
                    debug!("game loop shutdown requested");
                    return summary;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return summary,
            }
        }

        // 2. Advance one tick with live input if any, else the script
        let input = held_input.unwrap_or_else(|| script.input_at(summary.ticks));
        let snapshot = engine.tick(&input);
        summary.record(&snapshot);

        // 3. React to the run's lifecycle like a menu would
        let finished = matches!(
            snapshot.phase,
            GamePhase::GameOver | GamePhase::MissionComplete
        );
        if snapshot.phase == GamePhase::LevelComplete && runner.auto_advance {
            engine.queue_command(HostCommand::AdvanceLevel);
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if finished || summary.ticks >= runner.max_ticks {
            info!(
                ticks = summary.ticks,
                phase = ?summary.phase,
                score = summary.score,
                "run finished"
            );
            return summary;
        }

        // 5. Sleep until next tick
        if runner.realtime {
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
}
