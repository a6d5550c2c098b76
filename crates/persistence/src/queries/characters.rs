// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Character queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use party_roster_domain::Character;

use crate::data_models::CharacterRow;
use crate::diesel_schema::characters;
use crate::error::PersistenceError;

/// Loads a character by id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `character_id` - The character to load
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the character does not exist.
pub fn get_character(
    conn: &mut SqliteConnection,
    character_id: &str,
) -> Result<Character, PersistenceError> {
    let row: CharacterRow = characters::table
        .filter(characters::id.eq(character_id))
        .first::<CharacterRow>(conn)
        .optional()?
        .ok_or_else(|| {
            PersistenceError::NotFound(format!("Character '{character_id}' not found"))
        })?;

    row.into_character()
}

/// Loads every character owned by an account, ordered by nickname.
///
/// # Errors
///
/// Returns an error if the query or a row conversion fails.
pub fn list_characters_by_account(
    conn: &mut SqliteConnection,
    account_id: &str,
) -> Result<Vec<Character>, PersistenceError> {
    let rows: Vec<CharacterRow> = characters::table
        .filter(characters::account_id.eq(account_id))
        .order(characters::nickname.asc())
        .load::<CharacterRow>(conn)?;

    rows.into_iter().map(CharacterRow::into_character).collect()
}

/// Loads every character nickname, for advisory uniqueness checks.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_character_nicknames(
    conn: &mut SqliteConnection,
) -> Result<Vec<String>, PersistenceError> {
    Ok(characters::table
        .select(characters::nickname)
        .load::<String>(conn)?)
}
