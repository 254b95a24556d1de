//! Gold and score bookkeeping.
//!
//! Stored on `SimulationEngine`, not on any entity.

use rampart_core::error::CommandError;
use rampart_core::state::ScoreView;

/// Player gold.
#[derive(Debug, Clone, Default)]
pub struct Treasury {
    gold: u32,
}

impl Treasury {
    pub fn new(gold: u32) -> Self {
        Self { gold }
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Check that `cost` is affordable without spending it.
    pub fn ensure(&self, cost: u32) -> Result<(), CommandError> {
        if cost > self.gold {
            return Err(CommandError::InsufficientGold {
                needed: cost,
                available: self.gold,
            });
        }
        Ok(())
    }

    pub fn spend(&mut self, cost: u32) -> Result<(), CommandError> {
        self.ensure(cost)?;
        self.gold -= cost;
        Ok(())
    }

    pub fn earn(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_killed: u32,
    pub enemies_spawned: u32,
    pub enemies_total: u32,
    pub gold_earned: u32,
    pub projectiles_fired: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            enemies_killed: self.enemies_killed,
            enemies_spawned: self.enemies_spawned,
            enemies_total: self.enemies_total,
            gold_earned: self.gold_earned,
            projectiles_fired: self.projectiles_fired,
        }
    }
}
