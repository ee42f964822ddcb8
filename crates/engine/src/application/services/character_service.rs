//! Character Service - Application service for character management
//!
//! Use case implementations for creating, listing, updating, and
//! mutating characters. Role strings and amounts are validated here, at
//! the boundary, so the store and the entity only ever see well-formed
//! input.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::dto::{
    CharacterPage, CharacterView, CreateCharacterRequest, DamageOutcome, ExperienceOutcome,
    PageInfo, UpdateCharacterRequest,
};
use crate::stores::{CharacterFilter, CharacterStore};
use warband_domain::{Character, CharacterId, DomainError, Role};

/// Name given to characters created without one.
const DEFAULT_NAME: &str = "Unnamed Character";

/// Application service for character CRUD and stat mutation.
#[derive(Clone)]
pub struct CharacterService {
    store: Arc<CharacterStore>,
}

impl CharacterService {
    pub fn new(store: Arc<CharacterStore>) -> Self {
        Self { store }
    }

    /// Create a character, applying defaults for omitted fields: name,
    /// level 1, zero experience, and hp/max hp mirroring whichever of
    /// the two was given.
    #[instrument(skip(self, request))]
    pub fn create(&self, request: CreateCharacterRequest) -> Result<CharacterView, DomainError> {
        let role: Role = request.role.parse()?;

        let max_hp = request.max_hp.or(request.hp).unwrap_or(0);
        let hp = request.hp.unwrap_or(max_hp);
        if hp > max_hp {
            return Err(DomainError::invalid_argument("hp cannot exceed max hp"));
        }

        let level = request.level.unwrap_or(1).max(1);
        if level > self.store.curve().max_level {
            return Err(DomainError::invalid_argument(format!(
                "level cannot exceed {}",
                self.store.curve().max_level
            )));
        }

        let character = Character {
            id: request
                .id
                .map(CharacterId::new)
                .unwrap_or_else(CharacterId::unassigned),
            name: request.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            role,
            level,
            experience: request.experience.unwrap_or(0),
            hp,
            max_hp,
            strength: request.strength,
            dexterity: request.dexterity,
            intelligence: request.intelligence,
        };

        let created = self.store.create(character)?;
        info!(id = %created.id, name = %created.name, role = %created.role, "character created");
        Ok(self.view(&created))
    }

    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> Result<CharacterView, DomainError> {
        let character = self.store.get(&CharacterId::from(id))?;
        Ok(self.view(&character))
    }

    /// List one page of characters. `role` and `status` filters AND
    /// together; unknown filter values are rejected rather than
    /// silently matching nothing.
    #[instrument(skip(self))]
    pub fn list(
        &self,
        page: u32,
        limit: usize,
        role: Option<&str>,
        status: Option<&str>,
    ) -> Result<CharacterPage, DomainError> {
        let filter = CharacterFilter {
            role: role.map(str::parse).transpose()?,
            status: status.map(str::parse).transpose()?,
        };

        let result = self.store.list(page, limit, &filter);
        debug!(page, limit, total = result.total, "characters listed");
        Ok(CharacterPage {
            characters: result.items.iter().map(|c| self.view(c)).collect(),
            pagination: PageInfo::new(page.max(1), limit, result.total),
        })
    }

    /// Replace every mutable field of an existing character. The role is
    /// re-validated; the id cannot change.
    #[instrument(skip(self, request))]
    pub fn update(
        &self,
        id: &str,
        request: UpdateCharacterRequest,
    ) -> Result<CharacterView, DomainError> {
        let role: Role = request.role.parse()?;

        if !(1..=self.store.curve().max_level).contains(&request.level) {
            return Err(DomainError::invalid_argument(format!(
                "level must be between 1 and {}",
                self.store.curve().max_level
            )));
        }
        if request.hp > request.max_hp {
            return Err(DomainError::invalid_argument("hp cannot exceed max hp"));
        }

        let character_id = CharacterId::from(id);
        let character = Character {
            id: character_id.clone(),
            name: request.name,
            role,
            level: request.level,
            experience: request.experience,
            hp: request.hp,
            max_hp: request.max_hp,
            strength: request.strength,
            dexterity: request.dexterity,
            intelligence: request.intelligence,
        };

        let updated = self.store.update(&character_id, character)?;
        info!(id = %updated.id, "character updated");
        Ok(self.view(&updated))
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.store.delete(&CharacterId::from(id))?;
        info!(id, "character deleted");
        Ok(())
    }

    /// Add experience to a character, cascading level-ups atomically.
    /// Returns the level-up flag together with the updated character.
    #[instrument(skip(self))]
    pub fn add_experience(&self, id: &str, amount: i64) -> Result<ExperienceOutcome, DomainError> {
        if amount <= 0 {
            return Err(DomainError::invalid_argument(
                "experience amount must be positive",
            ));
        }

        let character_id = CharacterId::from(id);
        let leveled_up = self.store.add_experience(&character_id, amount as u64)?;
        let character = self.store.get(&character_id)?;
        info!(id, amount, leveled_up, level = character.level, "experience added");
        Ok(ExperienceOutcome {
            leveled_up,
            character: self.view(&character),
        })
    }

    /// Deal damage to a character, clamping hp at zero. Returns the
    /// death flag together with the updated character. A hit on an
    /// already-dead character reports `died` again.
    #[instrument(skip(self))]
    pub fn deal_damage(&self, id: &str, amount: i64) -> Result<DamageOutcome, DomainError> {
        if amount <= 0 {
            return Err(DomainError::invalid_argument("damage must be positive"));
        }

        let character_id = CharacterId::from(id);
        let damage = u32::try_from(amount).unwrap_or(u32::MAX);
        let died = self.store.deal_damage(&character_id, damage)?;
        let character = self.store.get(&character_id)?;
        info!(id, amount, died, hp = character.hp, "damage dealt");
        Ok(DamageOutcome {
            died,
            character: self.view(&character),
        })
    }

    fn view(&self, character: &Character) -> CharacterView {
        CharacterView::from_character(character, self.store.catalog())
    }
}

#[cfg(test)]
mod tests {
    use warband_domain::{ProgressionCurve, RoleCatalog};

    use super::*;

    fn service() -> CharacterService {
        CharacterService::new(Arc::new(CharacterStore::new(
            ProgressionCurve::default(),
            RoleCatalog::default(),
        )))
    }

    fn create_request(name: &str, role: &str) -> CreateCharacterRequest {
        CreateCharacterRequest {
            name: Some(name.to_string()),
            role: role.to_string(),
            hp: Some(100),
            strength: 100,
            dexterity: 50,
            intelligence: 30,
            ..CreateCharacterRequest::default()
        }
    }

    #[test]
    fn create_applies_defaults() {
        let service = service();
        let view = service
            .create(CreateCharacterRequest {
                role: "Warrior".to_string(),
                hp: Some(80),
                ..CreateCharacterRequest::default()
            })
            .expect("create");

        assert_eq!(view.name, "Unnamed Character");
        assert_eq!(view.level, 1);
        assert_eq!(view.experience, 0);
        assert_eq!(view.hp, 80);
        assert_eq!(view.max_hp, 80);
        assert!(!view.id.is_empty());
    }

    #[test]
    fn create_mirrors_max_hp_when_only_max_is_given() {
        let service = service();
        let view = service
            .create(CreateCharacterRequest {
                role: "Mage".to_string(),
                max_hp: Some(70),
                ..CreateCharacterRequest::default()
            })
            .expect("create");

        assert_eq!(view.hp, 70);
        assert_eq!(view.max_hp, 70);
    }

    #[test]
    fn create_rejects_an_unknown_role() {
        let err = service()
            .create(create_request("Brakka", "Bard"))
            .expect_err("invalid role");
        assert_eq!(err, DomainError::invalid_role("Bard"));
    }

    #[test]
    fn create_rejects_hp_above_max_hp() {
        let service = service();
        let err = service
            .create(CreateCharacterRequest {
                role: "Warrior".to_string(),
                hp: Some(120),
                max_hp: Some(100),
                ..CreateCharacterRequest::default()
            })
            .expect_err("hp > max hp");
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn create_rejects_a_level_past_the_cap() {
        let service = service();
        let err = service
            .create(CreateCharacterRequest {
                role: "Warrior".to_string(),
                hp: Some(100),
                level: Some(101),
                ..CreateCharacterRequest::default()
            })
            .expect_err("level past cap");
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[test]
    fn update_revalidates_the_role() {
        let service = service();
        let created = service.create(create_request("Brakka", "Warrior")).expect("create");

        let err = service
            .update(
                &created.id,
                UpdateCharacterRequest {
                    name: "Brakka".to_string(),
                    role: "Lich".to_string(),
                    level: 1,
                    experience: 0,
                    hp: 100,
                    max_hp: 100,
                    strength: 100,
                    dexterity: 50,
                    intelligence: 30,
                },
            )
            .expect_err("invalid role");
        assert_eq!(err, DomainError::invalid_role("Lich"));
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let service = service();
        let created = service.create(create_request("Brakka", "Warrior")).expect("create");

        let updated = service
            .update(
                &created.id,
                UpdateCharacterRequest {
                    name: "Brakka the Bold".to_string(),
                    role: "Thief".to_string(),
                    level: 4,
                    experience: 12,
                    hp: 60,
                    max_hp: 90,
                    strength: 70,
                    dexterity: 120,
                    intelligence: 40,
                },
            )
            .expect("update");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.role, Role::Thief);
        assert_eq!(updated.level, 4);
        assert_eq!(updated.dexterity_multiplier, 1.00);
    }

    #[test]
    fn list_rejects_unknown_filter_values() {
        let service = service();
        assert!(service.list(1, 10, Some("Bard"), None).is_err());
        assert!(service.list(1, 10, None, Some("undead")).is_err());
    }

    #[test]
    fn list_filters_by_role_and_status() {
        let service = service();
        service.create(create_request("Brakka", "Warrior")).expect("create");
        let thief = service.create(create_request("Vex", "Thief")).expect("create");
        service.deal_damage(&thief.id, 1000).expect("damage");

        let page = service
            .list(1, 10, Some("Thief"), Some("dead"))
            .expect("list");
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.characters[0].name, "Vex");
    }

    #[test]
    fn add_experience_rejects_non_positive_amounts() {
        let service = service();
        let created = service.create(create_request("Brakka", "Warrior")).expect("create");

        assert!(service.add_experience(&created.id, 0).is_err());
        assert!(service.add_experience(&created.id, -5).is_err());
    }

    #[test]
    fn add_experience_returns_the_updated_character() {
        let service = service();
        let created = service.create(create_request("Brakka", "Warrior")).expect("create");

        let outcome = service.add_experience(&created.id, 250).expect("add");
        assert!(outcome.leveled_up);
        assert_eq!(outcome.character.level, 3);
        assert_eq!(outcome.character.strength, 324);
    }

    #[test]
    fn deal_damage_reports_death_and_clamps() {
        let service = service();
        let created = service.create(create_request("Brakka", "Warrior")).expect("create");

        let first = service.deal_damage(&created.id, 1000).expect("damage");
        assert!(first.died);
        assert_eq!(first.character.hp, 0);
        assert_eq!(first.character.status.as_str(), "dead");

        let second = service.deal_damage(&created.id, 10).expect("damage");
        assert!(second.died);
        assert_eq!(second.character.hp, 0);
    }

    #[test]
    fn deal_damage_rejects_non_positive_amounts() {
        let service = service();
        let created = service.create(create_request("Brakka", "Warrior")).expect("create");
        assert!(service.deal_damage(&created.id, -1).is_err());
    }

    #[test]
    fn mutators_surface_not_found() {
        let service = service();
        assert!(matches!(
            service.add_experience("ghost", 10),
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.deal_damage("ghost", 10),
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete("ghost"),
            Err(DomainError::NotFound { .. })
        ));
    }
}
