//! Battle record entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{BattleId, CharacterId};

/// The recorded outcome of a battle between two characters.
///
/// Participant ids are lookup keys only - a record outlives the
/// characters it names, and stale ids are tolerated rather than
/// repaired. Once appended to the ledger a record is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRecord {
    pub id: BattleId,
    pub character1_id: CharacterId,
    pub character2_id: CharacterId,
    pub winner_id: CharacterId,
    pub loser_id: CharacterId,
    /// Ordered log lines of the (externally resolved) battle.
    pub battle_log: Vec<String>,
    pub experience_gained: u64,
    pub leveled_up: bool,
    pub timestamp: DateTime<Utc>,
}

impl BattleRecord {
    /// True if `id` fought in this battle on either side.
    pub fn involves(&self, id: &CharacterId) -> bool {
        &self.character1_id == id || &self.character2_id == id
    }

    /// True if winner and loser each name one of the two participants.
    pub fn outcome_is_coherent(&self) -> bool {
        let participants = [&self.character1_id, &self.character2_id];
        participants.contains(&&self.winner_id) && participants.contains(&&self.loser_id)
    }
}
