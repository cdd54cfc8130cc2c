//! Inputs to the simulation: per-tick player input and host lifecycle commands.
//!
//! Host commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Input flags sampled once per tick by the host.
///
/// `jump`, `transform` and `pause` are edge-style presses; `left`, `right`
/// and `fire` are held states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub fire: bool,
    pub transform: bool,
    pub pause: bool,
}

impl InputFrame {
    /// No buttons held.
    pub const IDLE: InputFrame = InputFrame {
        left: false,
        right: false,
        jump: false,
        fire: false,
        transform: false,
        pause: false,
    };

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::IDLE
        }
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::IDLE
        }
    }

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::IDLE
        }
    }

    pub fn fire() -> Self {
        Self {
            fire: true,
            ..Self::IDLE
        }
    }

    pub fn transform() -> Self {
        Self {
            transform: true,
            ..Self::IDLE
        }
    }
}

/// Lifecycle commands from the menu / CLI shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// Begin a fresh run (score 0, full lives) at the given level.
    StartRun { level: usize },
    /// Rebuild the current level without costing a life.
    RespawnInPlace,
    /// Move on after a level is complete.
    AdvanceLevel,
    /// Abandon the run.
    ReturnToMenu,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
