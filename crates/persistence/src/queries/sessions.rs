// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::SessionData;
use crate::diesel_schema::sessions;
use crate::error::PersistenceError;

/// Loads a session by token.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The token presented by the client
///
/// # Errors
///
/// Returns `PersistenceError::SessionNotFound` if the token is unknown.
pub fn get_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<SessionData, PersistenceError> {
    sessions::table
        .filter(sessions::session_token.eq(session_token))
        .first::<SessionData>(conn)
        .optional()?
        .ok_or_else(|| PersistenceError::SessionNotFound("No such session".to_string()))
}
