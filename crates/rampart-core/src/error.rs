//! Error types for configuration loading and player commands.

use thiserror::Error;

use crate::enums::GamePhase;
use crate::types::{BaseId, DefenseAreaId};

/// Problems with scenario or preset data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("path must contain at least one waypoint")]
    EmptyPath,

    #[error("wave references path {index} but the scenario defines {available}")]
    UnknownPath { index: usize, available: usize },

    #[error("scenario defines no defense area")]
    NoDefenseArea,

    #[error("unknown defense area {0:?}")]
    UnknownDefenseArea(DefenseAreaId),

    #[error("invalid {field}: {value} (must be positive)")]
    NonPositive { field: &'static str, value: f64 },

    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reasons a player command is refused. A refused command changes nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },

    #[error("unknown base {0:?}")]
    UnknownBase(BaseId),

    #[error("base {0:?} already carries a weapon module")]
    ModuleSlotOccupied(BaseId),

    #[error("command not allowed in phase {0:?}")]
    WrongPhase(GamePhase),
}
