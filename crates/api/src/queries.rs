// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only schedule queries.
//!
//! Queries require no authentication. Guests browse the same roster
//! views everyone else does.

use party_roster_domain::{ContentType, Schedule};
use party_roster_persistence::SqlitePersistence;

use crate::error::{ApiError, translate_persistence_error};

/// Lists every schedule, soonest start first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_schedules(persistence: &mut SqlitePersistence) -> Result<Vec<Schedule>, ApiError> {
    persistence
        .list_schedules()
        .map_err(translate_persistence_error)
}

/// Fetches a single schedule by identifier.
///
/// # Errors
///
/// Returns an error if no schedule carries the identifier.
pub fn get_schedule(
    persistence: &mut SqlitePersistence,
    schedule_id: &str,
) -> Result<Schedule, ApiError> {
    let (schedule, _version) = persistence
        .get_schedule(schedule_id)
        .map_err(translate_persistence_error)?;
    Ok(schedule)
}

/// Lists schedules the given character leads or sits in.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn my_schedules(
    persistence: &mut SqlitePersistence,
    character_id: &str,
) -> Result<Vec<Schedule>, ApiError> {
    let schedules: Vec<Schedule> = persistence
        .list_schedules()
        .map_err(translate_persistence_error)?;

    Ok(schedules
        .into_iter()
        .filter(|schedule| {
            schedule.is_led_by(character_id)
                || schedule
                    .members
                    .iter()
                    .any(|m| m.identity.character_id() == Some(character_id))
        })
        .collect())
}

/// Lists schedules of one content category, soonest start first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn schedules_by_type(
    persistence: &mut SqlitePersistence,
    content_type: ContentType,
) -> Result<Vec<Schedule>, ApiError> {
    let schedules: Vec<Schedule> = persistence
        .list_schedules()
        .map_err(translate_persistence_error)?;

    Ok(schedules
        .into_iter()
        .filter(|schedule| schedule.content_type == content_type)
        .collect())
}

/// Finds schedules whose leader or any member matches a nickname.
///
/// Matching is case-insensitive on substrings, so partial names work.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn search_by_nickname(
    persistence: &mut SqlitePersistence,
    nickname: &str,
) -> Result<Vec<Schedule>, ApiError> {
    let needle: String = nickname.to_lowercase();
    let schedules: Vec<Schedule> = persistence
        .list_schedules()
        .map_err(translate_persistence_error)?;

    Ok(schedules
        .into_iter()
        .filter(|schedule| {
            schedule.leader_nickname.to_lowercase().contains(&needle)
                || schedule
                    .members
                    .iter()
                    .any(|m| m.nickname.to_lowercase().contains(&needle))
        })
        .collect())
}
