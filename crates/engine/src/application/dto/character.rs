//! Character requests and views.

use serde::{Deserialize, Serialize};

use warband_domain::{Character, CharacterStatus, Role, RoleCatalog};

use super::pagination::PageInfo;

/// Payload for creating a character.
///
/// Omitted fields get defaults at the service boundary: a placeholder
/// name, level 1, zero experience, and hp/max hp mirroring whichever of
/// the two was given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    /// Caller-supplied id; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Role name; anything but the recognized variants is rejected.
    pub role: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub experience: Option<u64>,
    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub max_hp: Option<u32>,
    #[serde(default)]
    pub strength: u32,
    #[serde(default)]
    pub dexterity: u32,
    #[serde(default)]
    pub intelligence: u32,
}

/// Payload for updating a character - a full replacement of every
/// mutable field. The id in the path wins; there is none in the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacterRequest {
    pub name: String,
    /// Role name; re-validated on every update.
    pub role: String,
    pub level: u32,
    pub experience: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
}

/// A character as serialized for callers.
///
/// `status`, the three growth multipliers, and `speed_modifier` are
/// computed at read time from the current role and stats; they are
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterView {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub level: u32,
    pub experience: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub status: CharacterStatus,
    pub strength_multiplier: f64,
    pub dexterity_multiplier: f64,
    pub intelligence_multiplier: f64,
    pub speed_modifier: f64,
}

impl CharacterView {
    pub fn from_character(character: &Character, catalog: &RoleCatalog) -> Self {
        let growth = catalog.growth(character.role);
        Self {
            id: character.id.as_str().to_string(),
            name: character.name.clone(),
            role: character.role,
            level: character.level,
            experience: character.experience,
            hp: character.hp,
            max_hp: character.max_hp,
            strength: character.strength,
            dexterity: character.dexterity,
            intelligence: character.intelligence,
            status: character.status(),
            strength_multiplier: growth.strength,
            dexterity_multiplier: growth.dexterity,
            intelligence_multiplier: growth.intelligence,
            speed_modifier: character.speed_modifier(catalog),
        }
    }
}

/// One page of characters plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPage {
    pub characters: Vec<CharacterView>,
    pub pagination: PageInfo,
}

/// Result of an add-experience call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceOutcome {
    pub leveled_up: bool,
    pub character: CharacterView,
}

/// Result of a deal-damage call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageOutcome {
    pub died: bool,
    pub character: CharacterView,
}

#[cfg(test)]
mod tests {
    use warband_domain::CharacterId;

    use super::*;

    #[test]
    fn view_carries_computed_fields() {
        let mut character = Character::new("Brakka", Role::Warrior, 100, 100, 50, 30);
        character.id = CharacterId::new("hero-1");

        let view = CharacterView::from_character(&character, &RoleCatalog::default());

        assert_eq!(view.id, "hero-1");
        assert_eq!(view.status, CharacterStatus::Alive);
        assert_eq!(view.strength_multiplier, 0.80);
        assert_eq!(view.dexterity_multiplier, 0.20);
        assert_eq!(view.intelligence_multiplier, 0.00);
        assert_eq!(view.speed_modifier, 36.0);
    }

    #[test]
    fn view_serializes_camel_case_with_status_string() {
        let mut character = Character::new("Brakka", Role::Warrior, 100, 100, 50, 30);
        character.id = CharacterId::new("hero-1");
        character.hp = 0;

        let view = CharacterView::from_character(&character, &RoleCatalog::default());
        let json = serde_json::to_value(&view).expect("serialize");

        assert_eq!(json["status"], "dead");
        assert_eq!(json["maxHp"], 100);
        assert_eq!(json["speedModifier"], 36.0);
        assert_eq!(json["role"], "Warrior");
    }

    #[test]
    fn create_request_tolerates_a_minimal_payload() {
        let request: CreateCharacterRequest =
            serde_json::from_str(r#"{"role":"Mage","hp":80}"#).expect("deserialize");
        assert_eq!(request.role, "Mage");
        assert_eq!(request.hp, Some(80));
        assert_eq!(request.max_hp, None);
        assert_eq!(request.strength, 0);
    }
}
