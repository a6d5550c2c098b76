// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use party_roster_domain::Account;

use crate::data_models::format_timestamp;
use crate::diesel_schema::accounts;
use crate::error::PersistenceError;

/// Inserts a new account.
///
/// The login code column carries a unique constraint; inserting a
/// duplicate code fails at the database.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `account` - The account to store
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_account(
    conn: &mut SqliteConnection,
    account: &Account,
) -> Result<(), PersistenceError> {
    info!(
        "Creating account '{}' with role {}",
        account.nickname, account.role
    );

    diesel::insert_into(accounts::table)
        .values((
            accounts::id.eq(&account.id),
            accounts::login_code.eq(account.login_code.as_str()),
            accounts::nickname.eq(&account.nickname),
            accounts::role.eq(account.role.as_str()),
            accounts::created_at.eq(format_timestamp(account.created_at)?),
        ))
        .execute(conn)?;

    Ok(())
}

/// Deletes an account.
///
/// Characters and sessions referencing the account are removed by the
/// foreign key cascade.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `account_id` - The account to delete
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was deleted.
pub fn delete_account(
    conn: &mut SqliteConnection,
    account_id: &str,
) -> Result<(), PersistenceError> {
    info!("Deleting account with id: {}", account_id);

    let rows: usize =
        diesel::delete(accounts::table.filter(accounts::id.eq(account_id))).execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Account '{account_id}' not found"
        )));
    }

    Ok(())
}
