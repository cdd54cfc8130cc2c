//! Enemy and boss behaviour for TRANSFORR.
//!
//! Implements the per-archetype enemy state machines, archetype profiles,
//! and the boss's phase progression and volley patterns.

pub mod boss;
pub mod fsm;
pub mod profiles;

pub use transforr_core as core;
