//! Progression curve - the exponential experience requirement.

use serde::{Deserialize, Serialize};

/// The experience curve and its growth constants.
///
/// Immutable once constructed; `Default` carries the standard tuning
/// (100 base, 1.5x per level, cap at 100, +10% max hp per level).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionCurve {
    /// Experience required to go from level 1 to level 2.
    pub base_experience: f64,
    /// Per-level growth factor of the requirement.
    pub growth_factor: f64,
    /// Terminal level; no transitions fire at or past it.
    pub max_level: u32,
    /// Max-hp growth factor applied on each level-up.
    pub hp_growth: f64,
}

impl Default for ProgressionCurve {
    fn default() -> Self {
        Self {
            base_experience: 100.0,
            growth_factor: 1.5,
            max_level: 100,
            hp_growth: 1.1,
        }
    }
}

impl ProgressionCurve {
    /// Experience needed to advance from `level` to the next one; zero at
    /// or past the cap.
    ///
    /// Computed as float power then truncation toward zero. Later levels
    /// are sensitive to this exact rounding, so keep the float path.
    pub fn experience_required(&self, level: u32) -> u64 {
        if level >= self.max_level {
            return 0;
        }
        (self.base_experience * self.growth_factor.powi(level as i32 - 1)) as u64
    }

    /// True once `level` has reached the terminal level.
    pub fn is_max_level(&self, level: u32) -> bool {
        level >= self.max_level
    }
}
