//! Request and view types serialized across the service boundary.

mod battle;
mod character;
mod pagination;

pub use battle::{BattlePage, BattleView, RecordBattleRequest};
pub use character::{
    CharacterPage, CharacterView, CreateCharacterRequest, DamageOutcome, ExperienceOutcome,
    UpdateCharacterRequest,
};
pub use pagination::PageInfo;
