//! Append-only battle history.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use warband_domain::{BattleId, BattleRecord, CharacterId};

use super::{page_range, Page};

/// The battle ledger.
///
/// Records are appended and never updated or deleted. The ledger keeps
/// its own lock, independent of the character store, with the same
/// discipline: shared reads, exclusive appends.
///
/// Participant ids are never validated here - whether they still
/// resolve is the calling layer's concern, both at record time and
/// forever after.
pub struct BattleLedger {
    inner: RwLock<Vec<BattleRecord>>,
}

impl BattleLedger {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Append a record, generating an id when the caller left it
    /// unassigned. Returns the stored copy.
    pub fn record(&self, mut record: BattleRecord) -> BattleRecord {
        let mut inner = self.write();
        if record.id.is_unassigned() {
            record.id = BattleId::generate();
        }
        inner.push(record.clone());
        debug!(id = %record.id, winner = %record.winner_id, "battle appended");
        record
    }

    /// One 1-based page of records, newest first, plus the total count.
    /// A page past the end is empty with the true total still reported.
    pub fn list(&self, page: u32, limit: usize) -> Page<BattleRecord> {
        let inner = self.read();
        let total = inner.len();
        let range = page_range(total, page, limit);
        let items = inner
            .iter()
            .rev()
            .skip(range.start)
            .take(range.len())
            .cloned()
            .collect();
        Page { items, total }
    }

    /// Every record in which `id` fought on either side, newest first.
    /// A record matches once even when the character appears on both
    /// sides; matching is not deduplicated across records.
    pub fn list_for_character(&self, id: &CharacterId) -> Vec<BattleRecord> {
        self.read()
            .iter()
            .rev()
            .filter(|record| record.involves(id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Same poisoning stance as the character store: no writer here can
    // panic, so recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, Vec<BattleRecord>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<BattleRecord>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BattleLedger {
    fn default() -> Self {
        Self::new()
    }
}
