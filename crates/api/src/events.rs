// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game event banner management.
//!
//! Events are admin-curated announcements with an end instant. Reading
//! the banner is open to everyone, ended events stay visible through a
//! 24 hour grace window.

use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use party_roster_domain::{Account, GameEvent, ScheduleDate, ScheduleTime};
use party_roster_persistence::SqlitePersistence;

use crate::capabilities::AuthorizationService;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::CreateEventRequest;

/// Creates a game event.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, a field fails to
/// parse, or the insert fails.
pub fn create_event(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    request: CreateEventRequest,
    now: OffsetDateTime,
) -> Result<GameEvent, ApiError> {
    AuthorizationService::ensure_admin(actor, "create_event")?;

    let event: GameEvent = GameEvent {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        end_date: ScheduleDate::parse(&request.end_date).map_err(translate_domain_error)?,
        end_time: ScheduleTime::parse(&request.end_time).map_err(translate_domain_error)?,
        created_at: now,
    };

    persistence
        .insert_event(&event)
        .map_err(translate_persistence_error)?;

    info!(event_id = %event.id, name = %event.name, "Event created");

    Ok(event)
}

/// Deletes a game event.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the event does not
/// exist.
pub fn delete_event(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    event_id: &str,
) -> Result<(), ApiError> {
    AuthorizationService::ensure_admin(actor, "delete_event")?;

    persistence
        .delete_event(event_id)
        .map_err(translate_persistence_error)?;

    info!(event_id = %event_id, "Event deleted");

    Ok(())
}

/// Lists events still inside their visibility window, soonest end first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_visible_events(
    persistence: &mut SqlitePersistence,
    now: OffsetDateTime,
) -> Result<Vec<GameEvent>, ApiError> {
    let events: Vec<GameEvent> = persistence
        .list_events()
        .map_err(translate_persistence_error)?;

    Ok(events
        .into_iter()
        .filter(|event| event.is_visible(now))
        .collect())
}

/// Deletes every event whose grace window has passed.
///
/// Idempotent. A second call with the same `now` deletes nothing.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the delete fails.
pub fn purge_expired_events(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    now: OffsetDateTime,
) -> Result<usize, ApiError> {
    AuthorizationService::ensure_admin(actor, "purge_expired_events")?;

    let deleted: usize = persistence
        .delete_expired_events(now)
        .map_err(translate_persistence_error)?;

    info!(deleted, "Expired events purged");

    Ok(deleted)
}
