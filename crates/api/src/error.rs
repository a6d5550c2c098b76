// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use thiserror::Error;

use party_roster::CoreError;
use party_roster_domain::DomainError;
use party_roster_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent
/// the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed, the actor does not have permission.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A schedule write kept losing the version race.
    #[error("Schedule '{schedule_id}' is changing concurrently, try again")]
    Conflict {
        /// The schedule whose write was abandoned.
        schedule_id: String,
    },
    /// The uploaded CSV could not be parsed at all.
    #[error("Invalid CSV: {reason}")]
    InvalidCsvFormat {
        /// Why the CSV was rejected.
        reason: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::ScheduleNotFound { schedule_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Schedule"),
            message: format!("Schedule '{schedule_id}' does not exist"),
        },
        DomainError::CharacterNotFound { character_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Character"),
            message: format!("Character '{character_id}' does not exist"),
        },
        DomainError::AccountNotFound { account_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Account"),
            message: format!("Account '{account_id}' does not exist"),
        },
        DomainError::PartyClosed { schedule_id } => ApiError::DomainRuleViolation {
            rule: String::from("party_open"),
            message: format!("Schedule '{schedule_id}' is no longer recruiting"),
        },
        DomainError::PartyExpired { schedule_id } => ApiError::DomainRuleViolation {
            rule: String::from("party_not_expired"),
            message: format!("Schedule '{schedule_id}' has already started"),
        },
        DomainError::AlreadyJoined { schedule_id } => ApiError::DomainRuleViolation {
            rule: String::from("single_seat_per_character"),
            message: format!("Character already joined schedule '{schedule_id}'"),
        },
        DomainError::AlreadyLeader { schedule_id } => ApiError::DomainRuleViolation {
            rule: String::from("leader_cannot_join"),
            message: format!("Character already leads schedule '{schedule_id}'"),
        },
        DomainError::PartyFull {
            schedule_id,
            max_members,
        } => ApiError::DomainRuleViolation {
            rule: String::from("party_capacity"),
            message: format!(
                "Schedule '{schedule_id}' is full ({max_members} seats including the leader)"
            ),
        },
        DomainError::MemberNotFound { schedule_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Party member"),
            message: format!("No such member in schedule '{schedule_id}'"),
        },
        DomainError::NotParticipant { schedule_id } => ApiError::DomainRuleViolation {
            rule: String::from("member_of_party"),
            message: format!("Character is not part of schedule '{schedule_id}'"),
        },
        DomainError::NotCharacterOwner { character_id } => ApiError::Unauthorized {
            action: format!("act as character '{character_id}'"),
            required_role: String::from("owner"),
        },
        DomainError::InvalidDate { value } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{value}' is not a YYYY-MM-DD date"),
        },
        DomainError::InvalidTime { value } => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("'{value}' is not an HH:MM time"),
        },
        DomainError::InvalidJob { value } => ApiError::InvalidInput {
            field: String::from("job"),
            message: format!("Unknown job class '{value}'"),
        },
        DomainError::InvalidContentType { value } => ApiError::InvalidInput {
            field: String::from("content_type"),
            message: format!("Unknown content type '{value}'"),
        },
        DomainError::InvalidDifficulty { value } => ApiError::InvalidInput {
            field: String::from("difficulty"),
            message: format!("Unknown difficulty '{value}'"),
        },
        DomainError::InvalidRole { value } => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role '{value}'"),
        },
        DomainError::EmptyTitle => ApiError::InvalidInput {
            field: String::from("title"),
            message: String::from("Title must not be empty"),
        },
        DomainError::EmptyContentName => ApiError::InvalidInput {
            field: String::from("content_name"),
            message: String::from("Content name must not be empty"),
        },
        DomainError::EmptyNickname => ApiError::InvalidInput {
            field: String::from("nickname"),
            message: String::from("Nickname must not be empty"),
        },
        DomainError::NicknameTooLong { length } => ApiError::InvalidInput {
            field: String::from("nickname"),
            message: format!("Nickname of {length} characters exceeds the 20 character limit"),
        },
        DomainError::InvalidMaxMembers { value } => ApiError::InvalidInput {
            field: String::from("max_members"),
            message: format!("Party capacity {value} is outside the allowed range of 2 to 8"),
        },
        DomainError::MaxMembersBelowPartySize {
            requested,
            occupied,
        } => ApiError::DomainRuleViolation {
            rule: String::from("capacity_covers_party"),
            message: format!(
                "Party capacity {requested} is below the {occupied} seats already occupied"
            ),
        },
        DomainError::InvalidLoginCode { value } => ApiError::InvalidInput {
            field: String::from("login_code"),
            message: format!("'{value}' is not a valid six character code"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Storage detail stays behind the boundary. Callers see a not-found, a
/// conflict, or an opaque internal error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message,
        },
        PersistenceError::Conflict { schedule_id, .. } => ApiError::Conflict { schedule_id },
        PersistenceError::SessionNotFound(_) | PersistenceError::SessionExpired(_) => {
            ApiError::AuthenticationFailed {
                reason: String::from("Invalid or expired session"),
            }
        }
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
