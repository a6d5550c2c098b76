// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};
use uuid::Uuid;

use crate::types::{Account, ContentType, Difficulty, JobClass, ScheduleDate, ScheduleTime};

/// Smallest allowed party capacity, leader seat included.
pub const MIN_PARTY_SIZE: u8 = 2;

/// Largest allowed party capacity, leader seat included.
pub const MAX_PARTY_SIZE: u8 = 8;

/// How a party member is identified.
///
/// Members recruited through the app carry the identifier of their
/// registered character. Members added by hand (recruited outside the
/// app) get a random identifier minted at join time so that leave and
/// kick operations can still address them precisely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberIdentity {
    /// A registered character.
    Linked {
        /// Identifier of the registered character.
        character_id: String,
    },
    /// A hand-entered member with no registered character.
    AdHoc {
        /// Random identifier minted when the member was added.
        member_id: Uuid,
    },
}

impl MemberIdentity {
    /// Creates an identity for a registered character.
    #[must_use]
    pub fn linked(character_id: &str) -> Self {
        Self::Linked {
            character_id: character_id.to_string(),
        }
    }

    /// Mints a fresh identity for a hand-entered member.
    #[must_use]
    pub fn ad_hoc() -> Self {
        Self::AdHoc {
            member_id: Uuid::new_v4(),
        }
    }

    /// Returns the character identifier when this identity is linked.
    #[must_use]
    pub fn character_id(&self) -> Option<&str> {
        match self {
            Self::Linked { character_id } => Some(character_id),
            Self::AdHoc { .. } => None,
        }
    }
}

/// A seat in the party other than the leader's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyMember {
    /// How this member is addressed by leave and kick operations.
    pub identity: MemberIdentity,
    /// Display nickname shown on the roster.
    pub nickname: String,
    /// Job class the member will bring.
    pub job: JobClass,
    /// When the member joined.
    #[serde(with = "time::serde::timestamp")]
    pub joined_at: OffsetDateTime,
}

impl PartyMember {
    /// Returns true when this member is addressed by the given identity.
    #[must_use]
    pub fn matches(&self, identity: &MemberIdentity) -> bool {
        self.identity == *identity
    }

    /// Returns the roster line for this member, nickname plus job.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} ({})", self.nickname, self.job)
    }
}

/// Recruitment state of a schedule at a given instant.
///
/// The states are checked in a fixed order. An expired schedule reports
/// `Expired` even when it was also closed or full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecruitmentStatus {
    /// Seats remain and the start time has not passed.
    Open,
    /// The leader stopped recruiting.
    Closed,
    /// Every seat is taken.
    Full,
    /// The start time has passed.
    Expired,
}

/// A scheduled party run.
///
/// The leader occupies an implicit seat that never appears in `members`,
/// so a party of capacity `max_members` is full once `members` holds
/// `max_members - 1` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Stable schedule identifier.
    pub id: String,
    /// Free-form title shown on the roster.
    pub title: String,
    /// Broad content category.
    pub content_type: ContentType,
    /// Name of the specific content, such as "Glas Ghaibhleann".
    pub content_name: String,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Calendar date of the run.
    pub date: ScheduleDate,
    /// Wall-clock start time, interpreted as UTC.
    pub time: ScheduleTime,
    /// Party capacity including the leader seat.
    pub max_members: u8,
    /// Leader's display nickname.
    pub leader_nickname: String,
    /// Leader's job class.
    pub leader_job: JobClass,
    /// Leader's registered character, when the leader has one.
    pub leader_character_id: Option<String>,
    /// Account that created the schedule.
    pub creator_account_id: String,
    /// True once the leader stops recruiting.
    pub is_closed: bool,
    /// Free-form note shown to applicants.
    pub note: String,
    /// Occupied member seats, leader excluded.
    pub members: Vec<PartyMember>,
    /// Creation timestamp.
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    /// Timestamp of the most recent change.
    #[serde(with = "time::serde::timestamp")]
    pub updated_at: OffsetDateTime,
}

impl Schedule {
    /// Returns the instant the run starts, interpreted as UTC.
    #[must_use]
    pub const fn starts_at(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date.date(), self.time.time())
    }

    /// Returns true once the start time has passed.
    #[must_use]
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.starts_at().assume_utc() <= now
    }

    /// Number of occupied seats, leader included.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn occupied_seats(&self) -> u8 {
        // Capacity is capped at MAX_PARTY_SIZE, so the count fits in u8.
        self.members.len() as u8 + 1
    }

    /// Returns true when every seat is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.members.len() >= usize::from(self.max_members.saturating_sub(1))
    }

    /// Returns the recruitment state at the given instant.
    ///
    /// Expiry takes precedence over the closed flag, and the closed flag
    /// takes precedence over fullness.
    #[must_use]
    pub fn recruitment_status(&self, now: OffsetDateTime) -> RecruitmentStatus {
        if self.is_expired(now) {
            RecruitmentStatus::Expired
        } else if self.is_closed {
            RecruitmentStatus::Closed
        } else if self.is_full() {
            RecruitmentStatus::Full
        } else {
            RecruitmentStatus::Open
        }
    }

    /// Returns the roster line for the leader, nickname plus job.
    #[must_use]
    pub fn leader_display(&self) -> String {
        format!("{} ({})", self.leader_nickname, self.leader_job)
    }

    /// Finds the member seat addressed by the given identity.
    #[must_use]
    pub fn find_member(&self, identity: &MemberIdentity) -> Option<&PartyMember> {
        self.members.iter().find(|m| m.matches(identity))
    }

    /// Returns true when the identity occupies a member seat.
    #[must_use]
    pub fn contains_member(&self, identity: &MemberIdentity) -> bool {
        self.find_member(identity).is_some()
    }

    /// Returns true when the character leads this schedule.
    #[must_use]
    pub fn is_led_by(&self, character_id: &str) -> bool {
        self.leader_character_id.as_deref() == Some(character_id)
    }

    /// Returns true when the account may edit or delete this schedule.
    ///
    /// Admins may edit anything. Everyone else may only edit schedules
    /// they created.
    #[must_use]
    pub fn can_be_edited_by(&self, account: &Account) -> bool {
        account.is_admin() || self.creator_account_id == account.id
    }
}

/// Fields supplied when creating a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDraft {
    pub title: String,
    pub content_type: ContentType,
    pub content_name: String,
    pub difficulty: Difficulty,
    pub date: ScheduleDate,
    pub time: ScheduleTime,
    pub max_members: u8,
    pub leader_nickname: String,
    pub leader_job: JobClass,
    pub leader_character_id: Option<String>,
    pub note: String,
}

/// Fields that may change when editing a schedule. `None` leaves the
/// field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEdit {
    pub title: Option<String>,
    pub content_type: Option<ContentType>,
    pub content_name: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub date: Option<ScheduleDate>,
    pub time: Option<ScheduleTime>,
    pub max_members: Option<u8>,
    pub note: Option<String>,
}
