//! Hero <-> Vehicle transformation sequence.
//!
//! A transformation runs for a fixed number of ticks while the rest of the
//! world is frozen, then swaps the player's form. It cannot be cancelled,
//! so it is only started when the new form's box fits where the player
//! stands.

use tracing::{debug, warn};

use transforr_core::constants::{TRANSFORM_COOLDOWN_TICKS, TRANSFORM_DURATION_TICKS};
use transforr_core::enums::Mode;
use transforr_core::types::Aabb;

use crate::player::Player;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum TransformState {
    #[default]
    Idle,
    Transforming {
        from: Mode,
        /// Ticks spent in the sequence, including the tick that started it.
        elapsed: u32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Transformer {
    state: TransformState,
}

impl Transformer {
    pub fn is_active(&self) -> bool {
        matches!(self.state, TransformState::Transforming { .. })
    }

    /// 0.0..1.0 while a sequence is running.
    pub fn progress(&self) -> Option<f64> {
        match self.state {
            TransformState::Idle => None,
            TransformState::Transforming { elapsed, .. } => {
                Some(elapsed as f64 / TRANSFORM_DURATION_TICKS as f64)
            }
        }
    }

    /// Begin a transformation. The starting tick counts as the first tick of
    /// the sequence. No-op if one is running, the player's cooldown is set,
    /// or the other form would not fit among `solids`.
    pub fn try_start(&mut self, player: &Player, solids: &[Aabb]) -> bool {
        if self.is_active() || player.transform_cooldown > 0 {
            return false;
        }
        if player.fitted_rect(player.mode.opposite(), solids).is_none() {
            debug!(from = ?player.mode, "no room to transform");
            return false;
        }
        self.state = TransformState::Transforming {
            from: player.mode,
            elapsed: 1,
        };
        debug!(from = ?player.mode, "transformation started");
        true
    }

    /// Advance a running sequence by one tick. Returns the new mode on the
    /// tick the swap happens.
    pub fn advance(&mut self, player: &mut Player, solids: &[Aabb]) -> Option<Mode> {
        let TransformState::Transforming { from, elapsed } = self.state else {
            return None;
        };

        let elapsed = elapsed + 1;
        if elapsed < TRANSFORM_DURATION_TICKS {
            self.state = TransformState::Transforming { from, elapsed };
            return None;
        }

        let mode = from.opposite();
        if !player.refit_within(mode, solids) {
            // Geometry moved into the way since the start; hold on the last tick.
            warn!(?mode, "transformation blocked, holding");
            return None;
        }
        player.transform_cooldown = TRANSFORM_COOLDOWN_TICKS;
        self.state = TransformState::Idle;
        debug!(?mode, "transformation complete");
        Some(mode)
    }

    /// Drop any running sequence (level reset).
    pub fn reset(&mut self) {
        self.state = TransformState::Idle;
    }
}
