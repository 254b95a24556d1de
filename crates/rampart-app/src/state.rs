//! Messages and results shared between the runner and the game loop thread.

use serde::Serialize;

use rampart_core::commands::PlayerCommand;
use rampart_core::enums::GamePhase;
use rampart_core::state::{GameStateSnapshot, ScoreView};

/// Commands sent from the runner to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// How the game loop should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Upper bound on ticks. The loop also stops at Victory or Defeat.
    pub max_ticks: u64,
    /// Sleep between ticks to hold `TICK_RATE`.
    pub realtime: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: 3600,
            realtime: false,
        }
    }
}

/// What the game loop reports when it exits.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub frame: u64,
    pub phase: GamePhase,
    pub gold: u32,
    pub score: ScoreView,
    pub final_snapshot: GameStateSnapshot,
}

impl RunSummary {
    pub fn from_snapshot(ticks: u64, snapshot: GameStateSnapshot) -> Self {
        Self {
            ticks,
            frame: snapshot.clock.frame,
            phase: snapshot.phase,
            gold: snapshot.gold,
            score: snapshot.score.clone(),
            final_snapshot: snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mirrors_snapshot() {
        let snapshot = GameStateSnapshot {
            gold: 120,
            phase: GamePhase::Victory,
            ..Default::default()
        };
        let summary = RunSummary::from_snapshot(42, snapshot);
        assert_eq!(summary.ticks, 42);
        assert_eq!(summary.gold, 120);
        assert_eq!(summary.phase, GamePhase::Victory);
        assert_eq!(summary.frame, 0);
    }
}
