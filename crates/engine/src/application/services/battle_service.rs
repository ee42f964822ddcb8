//! Battle Service - records and serves pre-computed battle outcomes
//!
//! Battles are resolved elsewhere; this service only checks that a
//! submitted outcome is coherent, stamps it, appends it to the ledger,
//! and serves history views with participant names resolved at read
//! time.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::dto::{BattlePage, BattleView, PageInfo, RecordBattleRequest};
use crate::infrastructure::clock::Clock;
use crate::stores::{BattleLedger, CharacterStore};
use warband_domain::{BattleId, BattleRecord, CharacterId, DomainError};

/// Name rendered for a participant whose character no longer exists.
const UNKNOWN_NAME: &str = "Unknown";

/// Application service for the battle ledger.
#[derive(Clone)]
pub struct BattleService {
    characters: Arc<CharacterStore>,
    ledger: Arc<BattleLedger>,
    clock: Arc<dyn Clock>,
}

impl BattleService {
    pub fn new(
        characters: Arc<CharacterStore>,
        ledger: Arc<BattleLedger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            characters,
            ledger,
            clock,
        }
    }

    /// Record a battle outcome.
    ///
    /// Both participants must resolve to live characters at recording
    /// time, and winner and loser must each be one of the participants.
    /// Afterwards the record is immutable - participants may be deleted
    /// without touching it.
    #[instrument(skip(self, request))]
    pub fn record_battle(&self, request: RecordBattleRequest) -> Result<BattleView, DomainError> {
        let character1_id = CharacterId::from(request.character1_id.as_str());
        let character2_id = CharacterId::from(request.character2_id.as_str());
        for participant in [&character1_id, &character2_id] {
            if !self.characters.contains(participant) {
                return Err(DomainError::participant_not_found(participant.as_str()));
            }
        }

        let record = BattleRecord {
            id: request
                .id
                .map(BattleId::new)
                .unwrap_or_else(BattleId::unassigned),
            character1_id,
            character2_id,
            winner_id: CharacterId::from(request.winner_id.as_str()),
            loser_id: CharacterId::from(request.loser_id.as_str()),
            battle_log: request.battle_log,
            experience_gained: request.experience_gained,
            leveled_up: request.leveled_up,
            timestamp: request.timestamp.unwrap_or_else(|| self.clock.now()),
        };
        if !record.outcome_is_coherent() {
            return Err(DomainError::invalid_argument(
                "winner and loser must be battle participants",
            ));
        }

        let recorded = self.ledger.record(record);
        info!(id = %recorded.id, winner = %recorded.winner_id, "battle recorded");
        Ok(self.view(&recorded))
    }

    /// One page of battles, newest first.
    #[instrument(skip(self))]
    pub fn list_battles(&self, page: u32, limit: usize) -> BattlePage {
        let result = self.ledger.list(page, limit);
        debug!(page, limit, total = result.total, "battles listed");
        BattlePage {
            battles: result.items.iter().map(|r| self.view(r)).collect(),
            pagination: PageInfo::new(page.max(1), limit, result.total),
        }
    }

    /// Every battle a character fought in, newest first. Records that
    /// reference the character on either side are included.
    #[instrument(skip(self))]
    pub fn list_battles_for_character(&self, id: &str) -> Vec<BattleView> {
        self.ledger
            .list_for_character(&CharacterId::from(id))
            .iter()
            .map(|record| self.view(record))
            .collect()
    }

    fn view(&self, record: &BattleRecord) -> BattleView {
        BattleView {
            id: record.id.as_str().to_string(),
            character1_id: record.character1_id.as_str().to_string(),
            character1_name: self.display_name(&record.character1_id),
            character2_id: record.character2_id.as_str().to_string(),
            character2_name: self.display_name(&record.character2_id),
            winner_id: record.winner_id.as_str().to_string(),
            winner_name: self.display_name(&record.winner_id),
            loser_id: record.loser_id.as_str().to_string(),
            loser_name: self.display_name(&record.loser_id),
            battle_log: record.battle_log.clone(),
            experience_gained: record.experience_gained,
            leveled_up: record.leveled_up,
            timestamp: record.timestamp,
        }
    }

    // Orphaned ids are expected once characters get deleted; render a
    // placeholder instead of failing the whole view.
    fn display_name(&self, id: &CharacterId) -> String {
        self.characters
            .get(id)
            .map(|character| character.name)
            .unwrap_or_else(|_| UNKNOWN_NAME.to_string())
    }
}
