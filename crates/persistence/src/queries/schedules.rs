// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use party_roster_domain::Schedule;

use crate::data_models::ScheduleRow;
use crate::diesel_schema::schedules;
use crate::error::PersistenceError;

/// Loads a schedule and its current version.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `schedule_id` - The schedule to load
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the schedule does not exist.
pub fn get_schedule(
    conn: &mut SqliteConnection,
    schedule_id: &str,
) -> Result<(Schedule, i64), PersistenceError> {
    let row: ScheduleRow = schedules::table
        .filter(schedules::id.eq(schedule_id))
        .first::<ScheduleRow>(conn)
        .optional()?
        .ok_or_else(|| {
            PersistenceError::NotFound(format!("Schedule '{schedule_id}' not found"))
        })?;

    row.into_schedule()
}

/// Loads every schedule, ordered by date then time.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the query or a document deserialization fails.
pub fn list_schedules(conn: &mut SqliteConnection) -> Result<Vec<Schedule>, PersistenceError> {
    let rows: Vec<ScheduleRow> = schedules::table
        .order((schedules::date.asc(), schedules::time.asc()))
        .load::<ScheduleRow>(conn)?;

    rows.into_iter()
        .map(|row| row.into_schedule().map(|(schedule, _)| schedule))
        .collect()
}

/// Counts stored schedules.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_schedules(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(schedules::table.count().get_result(conn)?)
}
