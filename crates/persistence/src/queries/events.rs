// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game event queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use party_roster_domain::GameEvent;

use crate::data_models::GameEventRow;
use crate::diesel_schema::game_events;
use crate::error::PersistenceError;

/// Loads every game event, ordered by end date.
///
/// # Errors
///
/// Returns an error if the query or a row conversion fails.
pub fn list_events(conn: &mut SqliteConnection) -> Result<Vec<GameEvent>, PersistenceError> {
    let rows: Vec<GameEventRow> = game_events::table
        .order((game_events::end_date.asc(), game_events::end_time.asc()))
        .load::<GameEventRow>(conn)?;

    rows.into_iter().map(GameEventRow::into_event).collect()
}
