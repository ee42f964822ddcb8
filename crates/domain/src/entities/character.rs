//! Character entity and the leveling state machine.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;
use crate::value_objects::{CharacterStatus, ProgressionCurve, Role, RoleCatalog};

/// A playable character.
///
/// Invariants upheld by every mutation: `hp <= max_hp` and
/// `1 <= level <= curve.max_level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub role: Role,
    pub level: u32,
    pub experience: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
}

impl Character {
    /// Create a fresh level-1 character at full health, with no id
    /// assigned yet.
    pub fn new(
        name: impl Into<String>,
        role: Role,
        max_hp: u32,
        strength: u32,
        dexterity: u32,
        intelligence: u32,
    ) -> Self {
        Self {
            id: CharacterId::unassigned(),
            name: name.into(),
            role,
            level: 1,
            experience: 0,
            hp: max_hp,
            max_hp,
            strength,
            dexterity,
            intelligence,
        }
    }

    /// Current alive/dead status, derived from hp on every call.
    pub fn status(&self) -> CharacterStatus {
        CharacterStatus::from_hp(self.hp)
    }

    /// Add experience and run the level-up loop.
    ///
    /// At the level cap the amount is discarded and nothing changes.
    /// Otherwise the amount is banked and level-ups fire while the bank
    /// covers the next requirement - each one subtracts the requirement
    /// (the remainder carries over), increments the level, applies role
    /// growth, and restores hp to the grown max. A single large amount
    /// can cascade through several levels.
    ///
    /// Callers are responsible for rejecting non-positive amounts before
    /// getting here.
    ///
    /// Returns true if at least one level-up fired.
    pub fn add_experience(
        &mut self,
        amount: u64,
        curve: &ProgressionCurve,
        catalog: &RoleCatalog,
    ) -> bool {
        if curve.is_max_level(self.level) {
            return false;
        }

        self.experience += amount;
        let mut leveled_up = false;

        while self.level < curve.max_level {
            let required = curve.experience_required(self.level);
            if self.experience < required {
                break;
            }
            self.experience -= required;
            self.level += 1;
            leveled_up = true;
            self.hp = self.max_hp;
            self.apply_level_up_growth(curve, catalog);
        }

        leveled_up
    }

    /// Reduce hp by `amount`, clamping at zero.
    ///
    /// Returns true if the character is dead afterwards - including when
    /// they were already dead before the hit.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp == 0
    }

    /// Battle speed modifier for the character's current stats.
    pub fn speed_modifier(&self, catalog: &RoleCatalog) -> f64 {
        catalog.speed_modifier(self.role, self.strength, self.dexterity, self.intelligence)
    }

    fn apply_level_up_growth(&mut self, curve: &ProgressionCurve, catalog: &RoleCatalog) {
        let growth = catalog.growth(self.role);
        self.strength = grow(self.strength, growth.strength);
        self.dexterity = grow(self.dexterity, growth.dexterity);
        self.intelligence = grow(self.intelligence, growth.intelligence);

        self.max_hp = (f64::from(self.max_hp) * curve.hp_growth) as u32;
        self.hp = self.max_hp;
    }
}

/// Float multiply, then truncate toward zero. Growth at high levels is
/// sensitive to this exact rounding.
fn grow(stat: u32, multiplier: f64) -> u32 {
    (f64::from(stat) * (1.0 + multiplier)) as u32
}
