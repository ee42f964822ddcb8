//! Role value object - determines stat growth and battle speed.
//!
//! Provides type safety for role references instead of passing raw
//! strings around; anything that is not one of the three variants is
//! rejected where it enters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A character's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Front-line fighter - strength-heavy growth
    Warrior,
    /// Skirmisher - dexterity-heavy growth and the fastest initiative
    Thief,
    /// Caster - intelligence-heavy growth
    Mage,
}

impl Role {
    /// Returns the canonical string representation (e.g., "Warrior").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Thief => "Thief",
            Self::Mage => "Mage",
        }
    }

    /// Returns all recognized roles.
    pub fn all() -> [Role; 3] {
        [Self::Warrior, Self::Thief, Self::Mage]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Warrior" => Ok(Self::Warrior),
            "Thief" => Ok(Self::Thief),
            "Mage" => Ok(Self::Mage),
            other => Err(DomainError::invalid_role(other)),
        }
    }
}
