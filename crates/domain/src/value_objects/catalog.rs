//! Role catalog - per-role growth multipliers and speed weights.
//!
//! The catalog is an immutable value constructed once and injected into
//! whatever levels characters up or computes initiative, so tests can
//! substitute their own numbers.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Fractional stat growth applied on each level-up.
///
/// A multiplier of `0.8` means the stat becomes `floor(stat * 1.8)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthMultipliers {
    pub strength: f64,
    pub dexterity: f64,
    pub intelligence: f64,
}

/// Linear weights over current stats that yield the battle speed
/// modifier used for initiative ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedWeights {
    pub strength: f64,
    pub dexterity: f64,
    pub intelligence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleProfile {
    growth: GrowthMultipliers,
    speed: SpeedWeights,
}

/// Immutable lookup of growth multipliers and speed weights, keyed by role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCatalog {
    warrior: RoleProfile,
    thief: RoleProfile,
    mage: RoleProfile,
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self {
            warrior: RoleProfile {
                growth: GrowthMultipliers {
                    strength: 0.80,
                    dexterity: 0.20,
                    intelligence: 0.00,
                },
                speed: SpeedWeights {
                    strength: 0.00,
                    dexterity: 0.60,
                    intelligence: 0.20,
                },
            },
            thief: RoleProfile {
                growth: GrowthMultipliers {
                    strength: 0.25,
                    dexterity: 1.00,
                    intelligence: 0.25,
                },
                speed: SpeedWeights {
                    strength: 0.00,
                    dexterity: 0.80,
                    intelligence: 0.00,
                },
            },
            mage: RoleProfile {
                growth: GrowthMultipliers {
                    strength: 0.20,
                    dexterity: 0.20,
                    intelligence: 1.20,
                },
                speed: SpeedWeights {
                    strength: 0.10,
                    dexterity: 0.40,
                    intelligence: 0.00,
                },
            },
        }
    }
}

impl RoleCatalog {
    /// Growth multipliers applied when a character of `role` levels up.
    pub fn growth(&self, role: Role) -> GrowthMultipliers {
        self.profile(role).growth
    }

    /// Speed modifier for the given role and current stats.
    ///
    /// Pure and never persisted - recompute on every read.
    pub fn speed_modifier(
        &self,
        role: Role,
        strength: u32,
        dexterity: u32,
        intelligence: u32,
    ) -> f64 {
        let weights = self.profile(role).speed;
        weights.strength * f64::from(strength)
            + weights.dexterity * f64::from(dexterity)
            + weights.intelligence * f64::from(intelligence)
    }

    fn profile(&self, role: Role) -> &RoleProfile {
        match role {
            Role::Warrior => &self.warrior,
            Role::Thief => &self.thief,
            Role::Mage => &self.mage,
        }
    }
}
