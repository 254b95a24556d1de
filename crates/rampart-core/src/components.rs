//! Plain data shared by several entity types.

use serde::{Deserialize, Serialize};

/// Current and maximum hit points.
///
/// Construction guarantees `0 <= current <= max`. Damage is applied without
/// clamping, so `current` may go negative; removal is the engine's call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    /// Full health. Negative values are treated as zero.
    pub fn full(max: f64) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    pub fn apply_damage(&mut self, amount: f64) {
        self.current -= amount;
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Remaining fraction for health bars, clamped to `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }
}
