// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule document mutations.
//!
//! Schedules are stored as JSON documents next to a `version` column.
//! Every update is a compare-and-swap on that column so a stale
//! read-modify-write cycle is rejected instead of silently overwriting
//! a concurrent change.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::OffsetDateTime;
use tracing::{debug, info};

use party_roster::TransitionResult;
use party_roster_domain::Schedule;

use crate::data_models::format_timestamp;
use crate::diesel_schema::schedules;
use crate::error::PersistenceError;

/// Inserts a freshly created schedule at version 1.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `schedule` - The schedule to store
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn insert_schedule(
    conn: &mut SqliteConnection,
    schedule: &Schedule,
) -> Result<(), PersistenceError> {
    info!("Inserting schedule with id: {}", schedule.id);

    let document: String = serde_json::to_string(schedule)?;

    diesel::insert_into(schedules::table)
        .values((
            schedules::id.eq(&schedule.id),
            schedules::date.eq(schedule.date.to_string()),
            schedules::time.eq(schedule.time.to_string()),
            schedules::document.eq(&document),
            schedules::version.eq(1_i64),
            schedules::updated_at.eq(format_timestamp(schedule.updated_at)?),
        ))
        .execute(conn)?;

    Ok(())
}

/// Replaces a schedule document, compare-and-swap on the version.
///
/// The write only lands when the stored version still equals
/// `expected_version`. On success the stored version becomes
/// `expected_version + 1`, which is also returned.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `schedule` - The new document
/// * `expected_version` - The version the caller read before modifying
///
/// # Errors
///
/// * `PersistenceError::Conflict` when the stored version moved on
/// * `PersistenceError::NotFound` when the schedule no longer exists
pub fn update_schedule_cas(
    conn: &mut SqliteConnection,
    schedule: &Schedule,
    expected_version: i64,
) -> Result<i64, PersistenceError> {
    debug!(
        "CAS update for schedule {} at version {}",
        schedule.id, expected_version
    );

    let document: String = serde_json::to_string(schedule)?;
    let new_version: i64 = expected_version + 1;

    let rows: usize = diesel::update(
        schedules::table
            .filter(schedules::id.eq(&schedule.id))
            .filter(schedules::version.eq(expected_version)),
    )
    .set((
        schedules::date.eq(schedule.date.to_string()),
        schedules::time.eq(schedule.time.to_string()),
        schedules::document.eq(&document),
        schedules::version.eq(new_version),
        schedules::updated_at.eq(format_timestamp(schedule.updated_at)?),
    ))
    .execute(conn)?;

    if rows == 0 {
        // Distinguish a vanished schedule from a stale version.
        let exists: i64 = schedules::table
            .filter(schedules::id.eq(&schedule.id))
            .count()
            .get_result(conn)?;

        if exists == 0 {
            return Err(PersistenceError::NotFound(format!(
                "Schedule '{}' not found",
                schedule.id
            )));
        }

        return Err(PersistenceError::Conflict {
            schedule_id: schedule.id.clone(),
            expected_version,
        });
    }

    Ok(new_version)
}

/// Persists the outcome of a schedule transition.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `result` - The transition produced by the pure core
/// * `expected_version` - The version read before the transition
///
/// # Errors
///
/// Same as [`update_schedule_cas`].
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
    expected_version: i64,
) -> Result<i64, PersistenceError> {
    update_schedule_cas(conn, &result.new_schedule, expected_version)
}

/// Deletes a schedule.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `schedule_id` - The schedule to delete
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was deleted.
pub fn delete_schedule(
    conn: &mut SqliteConnection,
    schedule_id: &str,
) -> Result<(), PersistenceError> {
    info!("Deleting schedule with id: {}", schedule_id);

    let rows: usize =
        diesel::delete(schedules::table.filter(schedules::id.eq(schedule_id))).execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Schedule '{schedule_id}' not found"
        )));
    }

    Ok(())
}

/// Deletes every schedule whose start is strictly before `now`.
///
/// A second call with the same `now` deletes nothing. The comparison
/// uses the denormalized date and time columns, which sort
/// lexicographically in their ISO forms. Start times carry minute
/// precision, so when `now` sits past the top of the minute a start
/// within the current minute is already strictly past and the time
/// comparison becomes inclusive. A schedule starting exactly at `now`
/// survives.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `now` - The purge cutoff
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_past_schedules(
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> Result<usize, PersistenceError> {
    let date: time::Date = now.date();
    let cutoff_date: String = format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    );
    let cutoff_time: String = format!("{:02}:{:02}", now.hour(), now.minute());
    let within_minute: bool = now.second() > 0 || now.nanosecond() > 0;

    info!(
        "Purging schedules strictly before {} {}",
        cutoff_date, cutoff_time
    );

    let deleted: usize = if within_minute {
        diesel::delete(
            schedules::table.filter(
                schedules::date.lt(&cutoff_date).or(schedules::date
                    .eq(&cutoff_date)
                    .and(schedules::time.le(&cutoff_time))),
            ),
        )
        .execute(conn)?
    } else {
        diesel::delete(
            schedules::table.filter(
                schedules::date.lt(&cutoff_date).or(schedules::date
                    .eq(&cutoff_date)
                    .and(schedules::time.lt(&cutoff_time))),
            ),
        )
        .execute(conn)?
    };

    info!("Purged {} past schedules", deleted);
    Ok(deleted)
}
