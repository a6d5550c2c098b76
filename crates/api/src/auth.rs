// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Code-based authentication and session management.
//!
//! The credential is the six character login code itself. There is no
//! password: codes are opaque, drawn from a confusion-free alphabet,
//! and handed out by an admin. A reserved bootstrap code lazily creates
//! the first admin account on its first login.

use rand::RngExt;
use time::{Duration, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

use party_roster_domain::{Account, LOGIN_CODE_ALPHABET, LOGIN_CODE_LENGTH, LoginCode, Role};
use party_roster_persistence::{PersistenceError, SessionData, SqlitePersistence};

use crate::error::{ApiError, AuthError};

/// Nickname given to the lazily created bootstrap admin account.
const BOOTSTRAP_ADMIN_NICKNAME: &str = "Admin";

/// Authentication service for code-based login and sessions.
pub struct AuthenticationService;

impl AuthenticationService {
    /// How long a session stays valid without an explicit logout.
    const SESSION_TTL: Duration = Duration::days(30);

    /// Upper bound on collision retries during code generation.
    const MAX_CODE_ATTEMPTS: usize = 32;

    /// Generates a login code no existing account uses.
    ///
    /// Codes are six characters from the confusion-free alphabet. On a
    /// collision with an existing account the draw is repeated.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails or no free code was found
    /// within the retry budget.
    pub fn generate_login_code(
        persistence: &mut SqlitePersistence,
    ) -> Result<LoginCode, ApiError> {
        let mut rng = rand::rng();

        for _ in 0..Self::MAX_CODE_ATTEMPTS {
            let raw: String = (0..LOGIN_CODE_LENGTH)
                .map(|_| {
                    let idx: usize = rng.random_range(0..LOGIN_CODE_ALPHABET.len());
                    char::from(LOGIN_CODE_ALPHABET[idx])
                })
                .collect();

            let code: LoginCode =
                LoginCode::parse(&raw).map_err(|e| ApiError::Internal {
                    message: format!("Generated an invalid login code: {e}"),
                })?;

            let taken: bool = persistence
                .find_account_by_login_code(code.as_str())
                .map_err(|e| ApiError::Internal {
                    message: format!("Login code lookup failed: {e}"),
                })?
                .is_some();

            if !taken {
                return Ok(code);
            }
        }

        Err(ApiError::Internal {
            message: String::from("Could not find a free login code"),
        })
    }

    /// Logs in with a login code and opens a session.
    ///
    /// When the presented code equals the reserved bootstrap code and no
    /// account carries it yet, the first admin account is created on the
    /// spot. Later bootstrap logins reuse that same account.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `code` - The login code as typed by the user
    /// * `bootstrap_code` - The reserved admin bootstrap code
    /// * `now` - The current instant
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `account`).
    ///
    /// # Errors
    ///
    /// Returns an error if the code is malformed or unknown, or if the
    /// session cannot be created.
    pub fn login_with_code(
        persistence: &mut SqlitePersistence,
        code: &str,
        bootstrap_code: &LoginCode,
        now: OffsetDateTime,
    ) -> Result<(String, Account), AuthError> {
        let code: LoginCode =
            LoginCode::parse(code).map_err(|_| AuthError::AuthenticationFailed {
                reason: String::from("Login codes are six letters and digits"),
            })?;

        let existing: Option<Account> = persistence
            .find_account_by_login_code(code.as_str())
            .map_err(Self::map_persistence_error)?;

        let account: Account = match existing {
            Some(account) => account,
            None if code == *bootstrap_code => {
                let admin: Account = Account {
                    id: Uuid::new_v4().to_string(),
                    nickname: String::from(BOOTSTRAP_ADMIN_NICKNAME),
                    role: Role::Admin,
                    login_code: code,
                    created_at: now,
                };
                persistence
                    .insert_account(&admin)
                    .map_err(Self::map_persistence_error)?;
                info!(account_id = %admin.id, "Bootstrap admin account created");
                admin
            }
            None => {
                return Err(AuthError::AuthenticationFailed {
                    reason: String::from("Unknown login code"),
                });
            }
        };

        let session_token: String = Self::generate_session_token();
        persistence
            .create_session(&session_token, &account.id, now, Self::SESSION_TTL)
            .map_err(Self::map_persistence_error)?;

        info!(account_id = %account.id, role = %account.role, "Login");

        Ok((session_token, account))
    }

    /// Validates a session token and returns the account behind it.
    ///
    /// Touches the session's activity timestamp on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is unknown, the session has
    /// expired, or the account no longer exists.
    pub fn validate_session(
        persistence: &mut SqlitePersistence,
        session_token: &str,
        now: OffsetDateTime,
    ) -> Result<Account, AuthError> {
        let session: SessionData = persistence
            .get_session(session_token)
            .map_err(Self::map_persistence_error)?;

        let expired: bool = session
            .is_expired(now)
            .map_err(Self::map_persistence_error)?;
        if expired {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let account: Account = persistence
            .get_account(&session.account_id)
            .map_err(Self::map_persistence_error)?;

        persistence
            .update_session_activity(session_token, now)
            .map_err(Self::map_persistence_error)?;

        Ok(account)
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session does not exist.
    pub fn logout(
        persistence: &mut SqlitePersistence,
        session_token: &str,
    ) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(Self::map_persistence_error)
    }

    /// Generates an opaque session token.
    fn generate_session_token() -> String {
        format!(
            "session_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        match err {
            PersistenceError::SessionExpired(_) | PersistenceError::SessionNotFound(_) => {
                AuthError::AuthenticationFailed {
                    reason: String::from("Invalid or expired session"),
                }
            }
            PersistenceError::NotFound(_) => AuthError::AuthenticationFailed {
                reason: String::from("Account no longer exists"),
            },
            _ => AuthError::AuthenticationFailed {
                reason: format!("Database error: {err}"),
            },
        }
    }
}
