//! Simulation engine for TRANSFORR.
//!
//! Owns the hecs ECS world and the player, runs systems at a fixed tick
//! rate, and produces GameStateSnapshots for the host.

pub mod engine;
pub mod level;
pub mod levels;
pub mod physics;
pub mod player;
pub mod systems;
pub mod transform;
pub mod world_setup;

pub use transforr_core as core;
pub use engine::{SimConfig, SimulationEngine};

#[cfg(test)]
mod tests;
