// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Enumerated fields arrive as display strings and are parsed
//! at the boundary, so every caller gets the same error messages.

use serde::{Deserialize, Serialize};

use party_roster_domain::MemberIdentity;

/// API request to create a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    /// Free-form title.
    pub title: String,
    /// Content category, "Abyss" or "Raid".
    pub content_type: String,
    /// Name of the specific content.
    pub content_name: String,
    /// Difficulty tier display name.
    pub difficulty: String,
    /// Run date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM`.
    pub time: String,
    /// Party capacity including the leader seat (2-8).
    pub max_members: u8,
    /// Leader's display nickname.
    pub leader_nickname: String,
    /// Leader's job class display name.
    pub leader_job: String,
    /// Leader's registered character, when the leader has one.
    pub leader_character_id: Option<String>,
    /// Free-form note shown to applicants.
    pub note: String,
}

/// API request to edit schedule metadata. `None` fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScheduleRequest {
    pub title: Option<String>,
    pub content_type: Option<String>,
    pub content_name: Option<String>,
    pub difficulty: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub max_members: Option<u8>,
    pub note: Option<String>,
}

/// API request to join a party with a registered character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinPartyRequest {
    /// The joining character.
    pub character_id: String,
    /// Job class to bring. Defaults to the character's primary job.
    pub job: Option<String>,
}

/// API request to add a hand-entered member to a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMemberRequest {
    /// Display nickname for the new seat.
    pub nickname: String,
    /// Job class display name.
    pub job: String,
}

/// API request to remove a member seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveMemberRequest {
    /// Identity of the seat to remove.
    pub identity: MemberIdentity,
}

/// API request to correct a member's job class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMemberJobRequest {
    /// Identity of the seat to correct.
    pub identity: MemberIdentity,
    /// The new job class display name.
    pub job: String,
}

/// API request to correct a member's nickname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMemberNicknameRequest {
    /// Identity of the seat to correct.
    pub identity: MemberIdentity,
    /// The new nickname.
    pub nickname: String,
}

/// API request to register an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAccountRequest {
    /// Display nickname for the new account.
    pub nickname: String,
    /// Role name, "admin", "user", or "guest".
    pub role: String,
}

/// API response for a successful account registration.
///
/// Carries the generated login code so the admin can hand it out. The
/// code is shown exactly once here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAccountResponse {
    /// The new account's identifier.
    pub account_id: String,
    /// The new account's nickname.
    pub nickname: String,
    /// The new account's role name.
    pub role: String,
    /// The generated login code.
    pub login_code: String,
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The login code as typed.
    pub code: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token for later requests.
    pub session_token: String,
    /// The logged-in account's identifier.
    pub account_id: String,
    /// The logged-in account's nickname.
    pub nickname: String,
    /// The logged-in account's role name.
    pub role: String,
}

/// API request to create a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCharacterRequest {
    /// In-game character name.
    pub nickname: String,
    /// Job class display names, in preference order.
    pub jobs: Vec<String>,
}

/// API request to update a character. `None` fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCharacterRequest {
    pub nickname: Option<String>,
    pub jobs: Option<Vec<String>>,
}

/// API request to create a game event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    /// Event display name.
    pub name: String,
    /// Last day of the event, `YYYY-MM-DD`.
    pub end_date: String,
    /// End-of-event time, `HH:MM`.
    pub end_time: String,
}

/// API response for housekeeping calls that delete rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeResponse {
    /// How many rows were removed.
    pub deleted: usize,
}
