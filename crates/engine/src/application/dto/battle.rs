//! Battle requests and views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pagination::PageInfo;

/// Payload for recording a pre-computed battle outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBattleRequest {
    /// Caller-supplied id; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub character1_id: String,
    pub character2_id: String,
    pub winner_id: String,
    pub loser_id: String,
    #[serde(default)]
    pub battle_log: Vec<String>,
    #[serde(default)]
    pub experience_gained: u64,
    #[serde(default)]
    pub leveled_up: bool,
    /// Defaults to the recording time when absent.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A battle as serialized for callers, with participant names resolved
/// at read time. A name renders as "Unknown" once the character has
/// been deleted; the underlying record is untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleView {
    pub id: String,
    pub character1_id: String,
    pub character1_name: String,
    pub character2_id: String,
    pub character2_name: String,
    pub winner_id: String,
    pub winner_name: String,
    pub loser_id: String,
    pub loser_name: String,
    pub battle_log: Vec<String>,
    pub experience_gained: u64,
    pub leveled_up: bool,
    pub timestamp: DateTime<Utc>,
}

/// One page of battles plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlePage {
    pub battles: Vec<BattleView>,
    pub pagination: PageInfo,
}
