// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types read from the database and their conversions into domain
//! types. Timestamps are stored as RFC 3339 text.

use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use party_roster_domain::{
    Account, Character, GameEvent, JobClass, LoginCode, Role, Schedule, ScheduleDate, ScheduleTime,
};

use crate::error::PersistenceError;

/// Formats a timestamp for storage.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be rendered.
pub fn format_timestamp(ts: OffsetDateTime) -> Result<String, PersistenceError> {
    ts.format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns an error if the stored text is not RFC 3339.
pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(text, &Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Row read from the `schedules` table.
#[derive(Debug, Clone, Queryable)]
pub struct ScheduleRow {
    pub id: String,
    pub date: String,
    pub time: String,
    pub document: String,
    pub version: i64,
    pub updated_at: String,
}

impl ScheduleRow {
    /// Deserializes the stored document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid schedule.
    pub fn into_schedule(self) -> Result<(Schedule, i64), PersistenceError> {
        let schedule: Schedule = serde_json::from_str(&self.document)?;
        Ok((schedule, self.version))
    }
}

/// Row read from the `accounts` table.
#[derive(Debug, Clone, Queryable)]
pub struct AccountRow {
    pub id: String,
    pub login_code: String,
    pub nickname: String,
    pub role: String,
    pub created_at: String,
}

impl AccountRow {
    /// Converts the row into a domain account.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored field does not parse.
    pub fn into_account(self) -> Result<Account, PersistenceError> {
        Ok(Account {
            id: self.id,
            nickname: self.nickname,
            role: Role::parse(&self.role)
                .map_err(|e| PersistenceError::SerializationError(e.to_string()))?,
            login_code: LoginCode::parse(&self.login_code)
                .map_err(|e| PersistenceError::SerializationError(e.to_string()))?,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Row read from the `characters` table.
#[derive(Debug, Clone, Queryable)]
pub struct CharacterRow {
    pub id: String,
    pub account_id: String,
    pub nickname: String,
    pub jobs_json: String,
    pub created_at: String,
}

impl CharacterRow {
    /// Converts the row into a domain character.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored field does not parse.
    pub fn into_character(self) -> Result<Character, PersistenceError> {
        let jobs: Vec<JobClass> = serde_json::from_str(&self.jobs_json)?;
        Ok(Character {
            id: self.id,
            account_id: self.account_id,
            nickname: self.nickname,
            jobs,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Row read from the `game_events` table.
#[derive(Debug, Clone, Queryable)]
pub struct GameEventRow {
    pub id: String,
    pub name: String,
    pub end_date: String,
    pub end_time: String,
    pub created_at: String,
}

impl GameEventRow {
    /// Converts the row into a domain event.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored field does not parse.
    pub fn into_event(self) -> Result<GameEvent, PersistenceError> {
        Ok(GameEvent {
            id: self.id,
            name: self.name,
            end_date: ScheduleDate::parse(&self.end_date)
                .map_err(|e| PersistenceError::SerializationError(e.to_string()))?,
            end_time: ScheduleTime::parse(&self.end_time)
                .map_err(|e| PersistenceError::SerializationError(e.to_string()))?,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Session row as stored. Expiry is checked against the parsed
/// `expires_at` timestamp.
#[derive(Debug, Clone, Queryable)]
pub struct SessionData {
    pub session_token: String,
    pub account_id: String,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

impl SessionData {
    /// Returns true once the session's expiry instant has passed.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored expiry does not parse.
    pub fn is_expired(&self, now: OffsetDateTime) -> Result<bool, PersistenceError> {
        Ok(parse_timestamp(&self.expires_at)? <= now)
    }
}
