//! Error and diagnostic types for level ingestion.
//!
//! Only `LevelError` is fatal to a load request. `LevelDiagnostic`s describe
//! recoverable problems in the grid; the cell is treated as empty and the
//! diagnostic is reported to the host.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level {index} does not exist ({available} levels available)")]
    UnknownLevel { index: usize, available: usize },
    #[error("level grid is empty")]
    EmptyGrid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LevelDiagnostic {
    #[error("unknown glyph {glyph:?} at row {row}, column {column}; treated as empty")]
    UnknownGlyph { glyph: char, row: usize, column: usize },
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("extra boss anchor at row {row}, column {column} ignored")]
    DuplicateBoss { row: usize, column: usize },
}
