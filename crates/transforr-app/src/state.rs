//! Application state shared between the host shell and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use transforr_core::commands::{HostCommand, InputFrame};
use transforr_core::state::GameStateSnapshot;

use crate::config::AppConfig;
use crate::error::LoopError;
use crate::game_loop::{self, RunSummary};

/// Commands sent from the host shell to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A lifecycle command to forward to the simulation engine.
    Host(HostCommand),
    /// Hold this input every tick instead of the script.
    Input(InputFrame),
    /// Return to the scripted input.
    ReleaseInput,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// `mpsc::Sender` is Send but not Sync, so it sits behind a `Mutex`. The
/// latest snapshot is shared with the game loop thread through an `Arc`.
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the game loop has been started.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop. Only one loop may run per state.
    pub fn start(&self, config: AppConfig) -> Result<JoinHandle<RunSummary>, LoopError> {
        let mut running = self.running.lock().map_err(|_| LoopError::Poisoned)?;
        if *running {
            return Err(LoopError::AlreadyRunning);
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())?;

        let mut tx_lock = self.command_tx.lock().map_err(|_| LoopError::Poisoned)?;
        *tx_lock = Some(cmd_tx);
        *running = true;

        Ok(handle)
    }

    /// Send a command to the running game loop.
    pub fn send(&self, command: GameLoopCommand) -> Result<(), LoopError> {
        let tx_lock = self.command_tx.lock().map_err(|_| LoopError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx.send(command).map_err(|_| LoopError::Disconnected),
            None => Err(LoopError::NotStarted),
        }
    }

    /// Latest snapshot, if the loop has ticked at least once.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, LoopError> {
        let lock = self.latest_snapshot.lock().map_err(|_| LoopError::Poisoned)?;
        Ok(lock.clone())
    }
}
