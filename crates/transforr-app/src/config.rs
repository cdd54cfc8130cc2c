//! Runner configuration, loaded from TOML.
//!
//! ```toml
//! [sim]
//! seed = 7
//! starting_lives = 5
//!
//! [runner]
//! max_ticks = 7200
//! realtime = true
//!
//! [[script]]
//! ticks = 60
//! right = true
//! fire = true
//! ```
//!
//! Every table is optional. CLI flags override individual fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use transforr_sim::SimConfig;

use crate::error::ConfigError;
use crate::script::InputScript;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Stop after this many ticks even if the run is not over.
    pub max_ticks: u64,
    /// Pace ticks at the nominal rate instead of running flat out.
    pub realtime: bool,
    /// Queue `AdvanceLevel` as soon as a level is complete.
    pub auto_advance: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_ticks: 60 * 60 * 5,
            realtime: false,
            auto_advance: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub runner: RunnerConfig,
    pub script: InputScript,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
