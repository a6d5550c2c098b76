// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability checks for authenticated accounts.
//!
//! Roles gate broad classes of actions. Guests read, users mutate what
//! they own, admins mutate anything. Schedule edit rights additionally
//! flow from authorship.

use party_roster_domain::{Account, Character, Schedule};

use crate::error::AuthError;

/// Authorization service enforcing role and ownership checks.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the account may perform mutating actions at all.
    ///
    /// Guests are read-only.
    ///
    /// # Errors
    ///
    /// Returns an error if the account holds the Guest role.
    pub fn ensure_can_mutate(account: &Account, action: &str) -> Result<(), AuthError> {
        if account.can_mutate() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("User"),
            })
        }
    }

    /// Checks that the account holds the admin role.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is not an admin.
    pub fn ensure_admin(account: &Account, action: &str) -> Result<(), AuthError> {
        if account.is_admin() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            })
        }
    }

    /// Checks that the account may edit or delete the given schedule.
    ///
    /// Admins may edit anything, everyone else only what they created.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is neither an admin nor the
    /// schedule's creator.
    pub fn ensure_can_edit_schedule(
        account: &Account,
        schedule: &Schedule,
        action: &str,
    ) -> Result<(), AuthError> {
        if schedule.can_be_edited_by(account) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin or creator"),
            })
        }
    }

    /// Checks that the account owns the given character.
    ///
    /// Admins may act on any character.
    ///
    /// # Errors
    ///
    /// Returns an error if the character belongs to a different account.
    pub fn ensure_character_owner(
        account: &Account,
        character: &Character,
        action: &str,
    ) -> Result<(), AuthError> {
        if account.is_admin() || character.account_id == account.id {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("owner"),
            })
        }
    }
}
