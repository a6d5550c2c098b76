// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account queries.

use diesel::SqliteConnection;
use diesel::prelude::*;

use party_roster_domain::Account;

use crate::data_models::AccountRow;
use crate::diesel_schema::accounts;
use crate::error::PersistenceError;

/// Loads an account by id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `account_id` - The account to load
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the account does not exist.
pub fn get_account(
    conn: &mut SqliteConnection,
    account_id: &str,
) -> Result<Account, PersistenceError> {
    let row: AccountRow = accounts::table
        .filter(accounts::id.eq(account_id))
        .first::<AccountRow>(conn)
        .optional()?
        .ok_or_else(|| PersistenceError::NotFound(format!("Account '{account_id}' not found")))?;

    row.into_account()
}

/// Looks up an account by its login code.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `login_code` - The normalized login code
///
/// # Errors
///
/// Returns an error if the query fails. A missing account is `Ok(None)`.
pub fn find_account_by_login_code(
    conn: &mut SqliteConnection,
    login_code: &str,
) -> Result<Option<Account>, PersistenceError> {
    let row: Option<AccountRow> = accounts::table
        .filter(accounts::login_code.eq(login_code))
        .first::<AccountRow>(conn)
        .optional()?;

    row.map(AccountRow::into_account).transpose()
}

/// Loads every account, ordered by nickname.
///
/// # Errors
///
/// Returns an error if the query or a row conversion fails.
pub fn list_accounts(conn: &mut SqliteConnection) -> Result<Vec<Account>, PersistenceError> {
    let rows: Vec<AccountRow> = accounts::table
        .order(accounts::nickname.asc())
        .load::<AccountRow>(conn)?;

    rows.into_iter().map(AccountRow::into_account).collect()
}

/// Counts stored accounts.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_accounts(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(accounts::table.count().get_result(conn)?)
}
