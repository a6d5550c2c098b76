// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Character mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use party_roster_domain::Character;

use crate::data_models::format_timestamp;
use crate::diesel_schema::characters;
use crate::error::PersistenceError;

/// Inserts a new character.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `character` - The character to store
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn insert_character(
    conn: &mut SqliteConnection,
    character: &Character,
) -> Result<(), PersistenceError> {
    info!(
        "Creating character '{}' for account {}",
        character.nickname, character.account_id
    );

    let jobs_json: String = serde_json::to_string(&character.jobs)?;

    diesel::insert_into(characters::table)
        .values((
            characters::id.eq(&character.id),
            characters::account_id.eq(&character.account_id),
            characters::nickname.eq(&character.nickname),
            characters::jobs_json.eq(&jobs_json),
            characters::created_at.eq(format_timestamp(character.created_at)?),
        ))
        .execute(conn)?;

    Ok(())
}

/// Overwrites a character's nickname and job list.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `character` - The character with its new field values
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was updated.
pub fn update_character(
    conn: &mut SqliteConnection,
    character: &Character,
) -> Result<(), PersistenceError> {
    let jobs_json: String = serde_json::to_string(&character.jobs)?;

    let rows: usize = diesel::update(characters::table.filter(characters::id.eq(&character.id)))
        .set((
            characters::nickname.eq(&character.nickname),
            characters::jobs_json.eq(&jobs_json),
        ))
        .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Character '{}' not found",
            character.id
        )));
    }

    Ok(())
}

/// Deletes a character.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `character_id` - The character to delete
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was deleted.
pub fn delete_character(
    conn: &mut SqliteConnection,
    character_id: &str,
) -> Result<(), PersistenceError> {
    info!("Deleting character with id: {}", character_id);

    let rows: usize = diesel::delete(characters::table.filter(characters::id.eq(character_id)))
        .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Character '{character_id}' not found"
        )));
    }

    Ok(())
}
