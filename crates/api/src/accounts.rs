// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin-only account management.
//!
//! Accounts are created by an admin who hands the generated login code
//! to the member. The code is the credential and is returned exactly
//! once, in the registration response.

use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use party_roster_domain::{Account, Role, validate_nickname};
use party_roster_persistence::SqlitePersistence;

use crate::auth::AuthenticationService;
use crate::capabilities::AuthorizationService;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{RegisterAccountRequest, RegisterAccountResponse};

/// Registers a new account with a freshly generated login code.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the nickname or role
/// is invalid, or the insert fails.
pub fn register_account(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    request: RegisterAccountRequest,
    now: OffsetDateTime,
) -> Result<RegisterAccountResponse, ApiError> {
    AuthorizationService::ensure_admin(actor, "register_account")?;

    validate_nickname(&request.nickname).map_err(translate_domain_error)?;
    let role: Role = Role::parse(&request.role).map_err(translate_domain_error)?;

    let login_code = AuthenticationService::generate_login_code(persistence)?;

    let account: Account = Account {
        id: Uuid::new_v4().to_string(),
        nickname: request.nickname,
        role,
        login_code,
        created_at: now,
    };

    persistence
        .insert_account(&account)
        .map_err(translate_persistence_error)?;

    info!(account_id = %account.id, role = %account.role, "Account registered");

    Ok(RegisterAccountResponse {
        account_id: account.id,
        nickname: account.nickname,
        role: account.role.as_str().to_string(),
        login_code: account.login_code.as_str().to_string(),
    })
}

/// Lists every account.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the query fails.
pub fn list_accounts(
    persistence: &mut SqlitePersistence,
    actor: &Account,
) -> Result<Vec<Account>, ApiError> {
    AuthorizationService::ensure_admin(actor, "list_accounts")?;

    persistence
        .list_accounts()
        .map_err(translate_persistence_error)
}

/// Deletes an account together with its characters and sessions.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the account does
/// not exist.
pub fn delete_account(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    account_id: &str,
) -> Result<(), ApiError> {
    AuthorizationService::ensure_admin(actor, "delete_account")?;

    persistence
        .delete_account(account_id)
        .map_err(translate_persistence_error)?;

    info!(account_id = %account_id, "Account deleted");

    Ok(())
}
