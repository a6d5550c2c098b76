// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game event mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;
use tracing::info;

use party_roster_domain::GameEvent;

use crate::data_models::format_timestamp;
use crate::diesel_schema::game_events;
use crate::error::PersistenceError;
use crate::queries::events::list_events;

/// Inserts a new game event.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event` - The event to store
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_event(conn: &mut SqliteConnection, event: &GameEvent) -> Result<(), PersistenceError> {
    info!("Creating game event '{}'", event.name);

    diesel::insert_into(game_events::table)
        .values((
            game_events::id.eq(&event.id),
            game_events::name.eq(&event.name),
            game_events::end_date.eq(event.end_date.to_string()),
            game_events::end_time.eq(event.end_time.to_string()),
            game_events::created_at.eq(format_timestamp(event.created_at)?),
        ))
        .execute(conn)?;

    Ok(())
}

/// Deletes a game event.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event_id` - The event to delete
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was deleted.
pub fn delete_event(conn: &mut SqliteConnection, event_id: &str) -> Result<(), PersistenceError> {
    info!("Deleting game event with id: {}", event_id);

    let rows: usize = diesel::delete(game_events::table.filter(game_events::id.eq(event_id)))
        .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Event '{event_id}' not found"
        )));
    }

    Ok(())
}

/// Deletes every event whose visibility window has closed.
///
/// Visibility extends 24 hours past the event's end instant, so the
/// cutoff cannot be expressed as a plain column comparison. Events are
/// loaded, filtered through the domain rule, and deleted by id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `now` - The purge cutoff
///
/// # Errors
///
/// Returns an error if a query or delete fails.
pub fn delete_expired_events(
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> Result<usize, PersistenceError> {
    let events: Vec<GameEvent> = list_events(conn)?;

    let expired_ids: Vec<String> = events
        .into_iter()
        .filter(|event| !event.is_visible(now))
        .map(|event| event.id)
        .collect();

    if expired_ids.is_empty() {
        return Ok(0);
    }

    let deleted: usize =
        diesel::delete(game_events::table.filter(game_events::id.eq_any(&expired_ids)))
            .execute(conn)?;

    info!("Purged {} expired game events", deleted);
    Ok(deleted)
}
