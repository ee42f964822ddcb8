//! Thread-safe in-memory character collection.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use warband_domain::{
    Character, CharacterId, CharacterStatus, DomainError, ProgressionCurve, Role, RoleCatalog,
};

use super::{page_range, Page};

/// Filters applied when listing characters. Conditions AND together.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterFilter {
    pub role: Option<Role>,
    pub status: Option<CharacterStatus>,
}

impl CharacterFilter {
    fn matches(&self, character: &Character) -> bool {
        if let Some(role) = self.role {
            if character.role != role {
                return false;
            }
        }
        if let Some(status) = self.status {
            if character.status() != status {
                return false;
            }
        }
        true
    }
}

/// The character collection.
///
/// One exclusive/shared lock guards the whole collection: reads run
/// concurrently with other reads, while every mutation holds the lock
/// exclusively for its full duration, cascading level-ups included. All
/// mutations are therefore linearized - no update is lost, and a reader
/// never observes a half-written character.
///
/// Every operation that hands a `Character` out returns a detached copy;
/// nothing a caller holds aliases store state.
pub struct CharacterStore {
    curve: ProgressionCurve,
    catalog: RoleCatalog,
    inner: RwLock<Collection>,
}

#[derive(Default)]
struct Collection {
    characters: HashMap<CharacterId, Character>,
    /// Creation-ordered ids, so pagination is stable across calls.
    order: Vec<CharacterId>,
}

impl CharacterStore {
    pub fn new(curve: ProgressionCurve, catalog: RoleCatalog) -> Self {
        Self {
            curve,
            catalog,
            inner: RwLock::new(Collection::default()),
        }
    }

    /// The progression curve this store levels characters with.
    pub fn curve(&self) -> &ProgressionCurve {
        &self.curve
    }

    /// The role catalog this store levels characters with.
    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Insert a new character, generating an id when the caller left it
    /// unassigned.
    pub fn create(&self, mut character: Character) -> Result<Character, DomainError> {
        let mut inner = self.write();

        if character.id.is_unassigned() {
            character.id = CharacterId::generate();
        }
        if inner.characters.contains_key(&character.id) {
            return Err(DomainError::duplicate_id("character", character.id.as_str()));
        }

        inner.order.push(character.id.clone());
        inner
            .characters
            .insert(character.id.clone(), character.clone());
        debug!(id = %character.id, name = %character.name, "character stored");
        Ok(character)
    }

    pub fn get(&self, id: &CharacterId) -> Result<Character, DomainError> {
        self.read()
            .characters
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("character", id.as_str()))
    }

    pub fn contains(&self, id: &CharacterId) -> bool {
        self.read().characters.contains_key(id)
    }

    /// Every character, in creation order.
    pub fn get_all(&self) -> Vec<Character> {
        let inner = self.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.characters.get(id))
            .cloned()
            .collect()
    }

    /// One 1-based page of matching characters plus the total match
    /// count. A page past the end is empty; the total is still the true
    /// count of matches.
    pub fn list(&self, page: u32, limit: usize, filter: &CharacterFilter) -> Page<Character> {
        let inner = self.read();
        let matching: Vec<&Character> = inner
            .order
            .iter()
            .filter_map(|id| inner.characters.get(id))
            .filter(|character| filter.matches(character))
            .collect();

        let total = matching.len();
        let items = matching[page_range(total, page, limit)]
            .iter()
            .map(|character| (*character).clone())
            .collect();
        Page { items, total }
    }

    /// Replace every mutable field of an existing character. The id is
    /// not replaceable; whatever id the new state carries is overwritten.
    pub fn update(&self, id: &CharacterId, mut character: Character) -> Result<Character, DomainError> {
        let mut inner = self.write();

        if !inner.characters.contains_key(id) {
            return Err(DomainError::not_found("character", id.as_str()));
        }

        character.id = id.clone();
        inner.characters.insert(id.clone(), character.clone());
        debug!(id = %id, "character replaced");
        Ok(character)
    }

    pub fn delete(&self, id: &CharacterId) -> Result<(), DomainError> {
        let mut inner = self.write();

        if inner.characters.remove(id).is_none() {
            return Err(DomainError::not_found("character", id.as_str()));
        }
        inner.order.retain(|existing| existing != id);
        debug!(id = %id, "character deleted");
        Ok(())
    }

    /// Atomically add experience, cascading level-ups under the
    /// exclusive lock. Returns whether any level-up fired.
    ///
    /// The amount must already be validated as positive.
    pub fn add_experience(&self, id: &CharacterId, amount: u64) -> Result<bool, DomainError> {
        let mut inner = self.write();
        let character = inner
            .characters
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found("character", id.as_str()))?;

        let leveled_up = character.add_experience(amount, &self.curve, &self.catalog);
        debug!(id = %id, amount, leveled_up, level = character.level, "experience applied");
        Ok(leveled_up)
    }

    /// Atomically deal damage, clamping hp at zero. Returns whether the
    /// character is dead after the hit (true even if they already were).
    ///
    /// The amount must already be validated as positive.
    pub fn deal_damage(&self, id: &CharacterId, amount: u32) -> Result<bool, DomainError> {
        let mut inner = self.write();
        let character = inner
            .characters
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found("character", id.as_str()))?;

        let died = character.take_damage(amount);
        debug!(id = %id, amount, died, hp = character.hp, "damage applied");
        Ok(died)
    }

    pub fn len(&self) -> usize {
        self.read().characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().characters.is_empty()
    }

    // A poisoned lock means a writer panicked, which no code path here
    // does; recover the guard rather than propagate the panic.
    fn read(&self) -> RwLockReadGuard<'_, Collection> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collection> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CharacterStore {
    fn default() -> Self {
        Self::new(ProgressionCurve::default(), RoleCatalog::default())
    }
}
