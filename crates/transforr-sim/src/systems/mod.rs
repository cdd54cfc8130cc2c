//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components, the player, or the engine.

pub mod boss;
pub mod cleanup;
pub mod collision;
pub mod enemy_ai;
pub mod hazards;
pub mod particles;
pub mod pickups;
pub mod platforms;
pub mod projectiles;
pub mod snapshot;
