//! Character status - alive or dead, derived from current hp.
//!
//! Never persisted; recomputed from hp on every read.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Whether a character can still fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterStatus {
    /// hp > 0
    Alive,
    /// hp == 0
    Dead,
}

impl CharacterStatus {
    /// Derive the status from a current hp value.
    pub fn from_hp(hp: u32) -> Self {
        if hp > 0 {
            Self::Alive
        } else {
            Self::Dead
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alive" => Ok(Self::Alive),
            "dead" => Ok(Self::Dead),
            other => Err(DomainError::invalid_argument(format!(
                "unknown status: {other} (expected alive or dead)"
            ))),
        }
    }
}
