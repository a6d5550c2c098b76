// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;

/// Errors produced by domain rule validation and party membership checks.
///
/// Every failure mode carries enough context to render a user-facing
/// message without consulting the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested schedule does not exist.
    ScheduleNotFound {
        /// Identifier that failed to resolve.
        schedule_id: String,
    },
    /// The requested character does not exist.
    CharacterNotFound {
        /// Identifier that failed to resolve.
        character_id: String,
    },
    /// The requested account does not exist.
    AccountNotFound {
        /// Identifier that failed to resolve.
        account_id: String,
    },
    /// The schedule has stopped recruiting.
    PartyClosed {
        /// Schedule whose recruitment is closed.
        schedule_id: String,
    },
    /// The schedule's start time is in the past.
    PartyExpired {
        /// Schedule whose start time has passed.
        schedule_id: String,
    },
    /// The character already occupies a member seat in the party.
    AlreadyJoined {
        /// Schedule the character tried to join twice.
        schedule_id: String,
    },
    /// The character leads the party and cannot also join as a member.
    AlreadyLeader {
        /// Schedule led by the character.
        schedule_id: String,
    },
    /// Every seat in the party is taken.
    PartyFull {
        /// Schedule with no free seats.
        schedule_id: String,
        /// Configured capacity including the leader seat.
        max_members: u8,
    },
    /// No member seat matches the given identity.
    MemberNotFound {
        /// Schedule whose roster was searched.
        schedule_id: String,
    },
    /// The member is not part of the party.
    NotParticipant {
        /// Schedule the member does not belong to.
        schedule_id: String,
    },
    /// The character does not belong to the acting account.
    NotCharacterOwner {
        /// Character claimed by the wrong account.
        character_id: String,
    },
    /// A date string did not match the `YYYY-MM-DD` calendar form.
    InvalidDate {
        /// The rejected input.
        value: String,
    },
    /// A time string did not match the `HH:MM` 24-hour form.
    InvalidTime {
        /// The rejected input.
        value: String,
    },
    /// A job class name was not recognized.
    InvalidJob {
        /// The rejected input.
        value: String,
    },
    /// A content type name was not recognized.
    InvalidContentType {
        /// The rejected input.
        value: String,
    },
    /// A difficulty name was not recognized.
    InvalidDifficulty {
        /// The rejected input.
        value: String,
    },
    /// A role name was not recognized.
    InvalidRole {
        /// The rejected input.
        value: String,
    },
    /// A schedule title was empty after trimming.
    EmptyTitle,
    /// A content name was empty after trimming.
    EmptyContentName,
    /// A nickname was empty after trimming.
    EmptyNickname,
    /// A nickname exceeded the allowed length.
    NicknameTooLong {
        /// Length of the rejected nickname in characters.
        length: usize,
    },
    /// The requested capacity falls outside the allowed party sizes.
    InvalidMaxMembers {
        /// The rejected capacity.
        value: u8,
    },
    /// An edit tried to shrink capacity below the current head count.
    MaxMembersBelowPartySize {
        /// The rejected capacity.
        requested: u8,
        /// Seats currently occupied including the leader.
        occupied: u8,
    },
    /// A login code did not match the expected shape.
    InvalidLoginCode {
        /// The rejected input.
        value: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScheduleNotFound { schedule_id } => {
                write!(f, "schedule '{schedule_id}' not found")
            }
            Self::CharacterNotFound { character_id } => {
                write!(f, "character '{character_id}' not found")
            }
            Self::AccountNotFound { account_id } => {
                write!(f, "account '{account_id}' not found")
            }
            Self::PartyClosed { schedule_id } => {
                write!(f, "schedule '{schedule_id}' is no longer recruiting")
            }
            Self::PartyExpired { schedule_id } => {
                write!(f, "schedule '{schedule_id}' has already started")
            }
            Self::AlreadyJoined { schedule_id } => {
                write!(f, "character already joined schedule '{schedule_id}'")
            }
            Self::AlreadyLeader { schedule_id } => {
                write!(f, "character already leads schedule '{schedule_id}'")
            }
            Self::PartyFull {
                schedule_id,
                max_members,
            } => {
                write!(
                    f,
                    "schedule '{schedule_id}' is full ({max_members} seats including the leader)"
                )
            }
            Self::MemberNotFound { schedule_id } => {
                write!(f, "no such member in schedule '{schedule_id}'")
            }
            Self::NotParticipant { schedule_id } => {
                write!(f, "member is not part of schedule '{schedule_id}'")
            }
            Self::NotCharacterOwner { character_id } => {
                write!(
                    f,
                    "character '{character_id}' does not belong to the acting account"
                )
            }
            Self::InvalidDate { value } => {
                write!(f, "invalid date '{value}', expected YYYY-MM-DD")
            }
            Self::InvalidTime { value } => {
                write!(f, "invalid time '{value}', expected HH:MM")
            }
            Self::InvalidJob { value } => {
                write!(f, "unknown job class '{value}'")
            }
            Self::InvalidContentType { value } => {
                write!(f, "unknown content type '{value}'")
            }
            Self::InvalidDifficulty { value } => {
                write!(f, "unknown difficulty '{value}'")
            }
            Self::InvalidRole { value } => {
                write!(f, "unknown role '{value}'")
            }
            Self::EmptyTitle => write!(f, "schedule title must not be empty"),
            Self::EmptyContentName => write!(f, "content name must not be empty"),
            Self::EmptyNickname => write!(f, "nickname must not be empty"),
            Self::NicknameTooLong { length } => {
                write!(f, "nickname of {length} characters exceeds the 20 character limit")
            }
            Self::InvalidMaxMembers { value } => {
                write!(f, "party capacity {value} is outside the allowed range of 2 to 8")
            }
            Self::MaxMembersBelowPartySize {
                requested,
                occupied,
            } => {
                write!(
                    f,
                    "party capacity {requested} is below the {occupied} seats already occupied"
                )
            }
            Self::InvalidLoginCode { value } => {
                write!(f, "login code '{value}' is not a valid six character code")
            }
        }
    }
}

impl std::error::Error for DomainError {}
