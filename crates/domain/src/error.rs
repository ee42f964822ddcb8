//! Unified error types for the domain layer
//!
//! Every fallible operation in the workspace returns `DomainError`, so the
//! calling layer can translate failures into client-facing responses
//! without string matching.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Operation referenced an id absent from the collection
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Create supplied an id already present
    #[error("{entity} with id {id} already exists")]
    DuplicateId { entity: &'static str, id: String },

    /// Role is not one of the recognized variants
    #[error("invalid role: {0} (must be Warrior, Thief, or Mage)")]
    InvalidRole(String),

    /// Caller passed a value outside the operation's contract
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A battle referenced a character id that does not resolve
    #[error("battle participant with id {id} not found")]
    ParticipantNotFound { id: String },
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a duplicate id error
    pub fn duplicate_id(entity: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            entity,
            id: id.into(),
        }
    }

    /// Create an invalid role error
    pub fn invalid_role(role: impl Into<String>) -> Self {
        Self::InvalidRole(role.into())
    }

    /// Creates an invalid argument error for contract violations.
    ///
    /// Use this when a caller-supplied value is outside the allowed
    /// range before any state is touched:
    /// - Non-positive experience or damage amounts
    /// - A level outside the 1..=cap range
    /// - hp exceeding max hp
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a participant not found error
    pub fn participant_not_found(id: impl Into<String>) -> Self {
        Self::ParticipantNotFound { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("character", "c-42");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "character with id c-42 not found");
    }

    #[test]
    fn test_duplicate_id_error() {
        let err = DomainError::duplicate_id("character", "c-42");
        assert!(matches!(err, DomainError::DuplicateId { .. }));
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_invalid_role_error() {
        let err = DomainError::invalid_role("Paladin");
        assert!(matches!(err, DomainError::InvalidRole(_)));
        assert!(err.to_string().contains("Paladin"));
        assert!(err.to_string().contains("Warrior, Thief, or Mage"));
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = DomainError::invalid_argument("damage must be positive");
        assert_eq!(
            err.to_string(),
            "invalid argument: damage must be positive"
        );
    }

    #[test]
    fn test_participant_not_found_error() {
        let err = DomainError::participant_not_found("ghost");
        assert!(matches!(err, DomainError::ParticipantNotFound { .. }));
        assert!(err.to_string().contains("ghost"));
    }
}
