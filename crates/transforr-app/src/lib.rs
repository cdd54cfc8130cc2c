//! TRANSFORR headless runner.
//!
//! This crate wires the simulation to a fixed-rate game loop thread, feeds
//! it scripted or live input, and exposes the latest snapshot to the host.

pub mod config;
pub mod error;
pub mod game_loop;
pub mod script;
pub mod state;

pub use transforr_core as core;
