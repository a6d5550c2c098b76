// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::data_models::format_timestamp;
use crate::diesel_schema::sessions;
use crate::error::PersistenceError;

/// Creates a session for an account.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The opaque token handed to the client
/// * `account_id` - The authenticated account
/// * `now` - The current instant
/// * `ttl` - How long the session stays valid
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    account_id: &str,
    now: OffsetDateTime,
    ttl: Duration,
) -> Result<(), PersistenceError> {
    info!("Creating session for account {}", account_id);

    let now_text: String = format_timestamp(now)?;
    let expires_text: String = format_timestamp(now + ttl)?;

    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::account_id.eq(account_id),
            sessions::created_at.eq(&now_text),
            sessions::last_activity_at.eq(&now_text),
            sessions::expires_at.eq(&expires_text),
        ))
        .execute(conn)?;

    Ok(())
}

/// Records activity on a session.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The session to touch
/// * `now` - The current instant
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_token: &str,
    now: OffsetDateTime,
) -> Result<(), PersistenceError> {
    debug!("Updating session activity");

    diesel::update(sessions::table.filter(sessions::session_token.eq(session_token)))
        .set(sessions::last_activity_at.eq(format_timestamp(now)?))
        .execute(conn)?;

    Ok(())
}

/// Deletes a session, logging the account out.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The session to delete
///
/// # Errors
///
/// Returns `PersistenceError::SessionNotFound` if no row was deleted.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<(), PersistenceError> {
    let rows: usize =
        diesel::delete(sessions::table.filter(sessions::session_token.eq(session_token)))
            .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::SessionNotFound(
            "No such session".to_string(),
        ));
    }

    Ok(())
}

/// Deletes every session past its expiry.
///
/// RFC 3339 timestamps in UTC sort lexicographically, so the cutoff is
/// a plain string comparison.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `now` - The purge cutoff
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_expired_sessions(
    conn: &mut SqliteConnection,
    now: OffsetDateTime,
) -> Result<usize, PersistenceError> {
    let cutoff: String = format_timestamp(now)?;

    let deleted: usize = diesel::delete(sessions::table.filter(sessions::expires_at.le(&cutoff)))
        .execute(conn)?;

    if deleted > 0 {
        info!("Purged {} expired sessions", deleted);
    }

    Ok(deleted)
}
