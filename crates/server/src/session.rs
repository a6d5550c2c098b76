// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! This module provides an Axum extractor that validates session
//! tokens and resolves the account behind them at the server boundary.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;
use tracing::{debug, warn};

use party_roster_api::AuthenticationService;
use party_roster_domain::Account;

use crate::AppState;

/// Extractor for authenticated accounts.
///
/// Validates the `Authorization: Bearer <token>` header via
/// `AuthenticationService::validate_session` and returns the account
/// holding the session. Validation touches the session's activity
/// timestamp.
///
/// # Errors
///
/// Rejects with HTTP 401 Unauthorized if:
/// - Authorization header is missing
/// - Authorization header format is invalid
/// - Session token is invalid or expired
/// - The account no longer exists
pub struct SessionAccount(pub Account);

impl FromRequestParts<AppState> for SessionAccount {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })?;

        let mut persistence = state.persistence.lock().await;
        let account: Account = AuthenticationService::validate_session(
            &mut persistence,
            token,
            OffsetDateTime::now_utc(),
        )
        .map_err(|e| {
            warn!(error = %e, "Session validation failed");
            SessionError::InvalidSession(e.to_string())
        })?;
        drop(persistence);

        debug!(
            account_id = %account.id,
            role = %account.role,
            "Session validated successfully"
        );

        Ok(Self(account))
    }
}

/// Session extraction errors.
///
/// These errors are returned when session validation fails and are
/// automatically converted to HTTP responses.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingAuthorizationHeader => {
                (StatusCode::UNAUTHORIZED, "Missing Authorization header")
            }
            Self::InvalidAuthorizationHeader => (
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
            Self::InvalidSession(reason) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    format!("Session validation failed: {reason}"),
                )
                    .into_response();
            }
        };

        (status, message).into_response()
    }
}
