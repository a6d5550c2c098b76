// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Party Roster.
//!
//! This crate stores schedule documents, accounts, characters, game
//! events, and sessions. It is built on Diesel over `SQLite`.
//!
//! ## Document store with versioned writes
//!
//! Schedules are kept as JSON documents next to a `version` column.
//! Reads hand back the document together with its version; writes are
//! compare-and-swap on that version and fail with
//! [`PersistenceError::Conflict`] when a concurrent writer got there
//! first. Callers re-read, re-apply, and retry.
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against in-memory `SQLite`
//! - Each in-memory database is uniquely named via an atomic counter,
//!   so tests are isolated without time-based collisions

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Duration, OffsetDateTime};

use party_roster::TransitionResult;
use party_roster_domain::{Account, Character, GameEvent, Schedule};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::SessionData;
pub use error::PersistenceError;

/// Type alias kept for call sites that name the backend explicitly.
pub type SqlitePersistence = Persistence;

/// Persistence adapter for roster documents and account data.
///
/// Backend selection happens once at construction time and is
/// transparent to callers.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Unique shared in-memory database name per call so tests are isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file databases.
        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ------------------------------------------------------------------
    // Schedules
    // ------------------------------------------------------------------

    /// Inserts a freshly created schedule at version 1.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails.
    pub fn insert_schedule(&mut self, schedule: &Schedule) -> Result<(), PersistenceError> {
        mutations::schedules::insert_schedule(&mut self.conn, schedule)
    }

    /// Loads a schedule and the version to use for a later write.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the schedule does not exist.
    pub fn get_schedule(&mut self, schedule_id: &str) -> Result<(Schedule, i64), PersistenceError> {
        queries::schedules::get_schedule(&mut self.conn, schedule_id)
    }

    /// Loads every schedule, ordered by date then time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_schedules(&mut self) -> Result<Vec<Schedule>, PersistenceError> {
        queries::schedules::list_schedules(&mut self.conn)
    }

    /// Counts stored schedules.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_schedules(&mut self) -> Result<i64, PersistenceError> {
        queries::schedules::count_schedules(&mut self.conn)
    }

    /// Replaces a schedule document, compare-and-swap on the version.
    ///
    /// # Errors
    ///
    /// * `PersistenceError::Conflict` when the stored version moved on
    /// * `PersistenceError::NotFound` when the schedule no longer exists
    pub fn update_schedule_cas(
        &mut self,
        schedule: &Schedule,
        expected_version: i64,
    ) -> Result<i64, PersistenceError> {
        mutations::schedules::update_schedule_cas(&mut self.conn, schedule, expected_version)
    }

    /// Persists the outcome of a schedule transition.
    ///
    /// # Errors
    ///
    /// Same as [`Self::update_schedule_cas`].
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
        expected_version: i64,
    ) -> Result<i64, PersistenceError> {
        mutations::schedules::persist_transition(&mut self.conn, result, expected_version)
    }

    /// Deletes a schedule.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the schedule does not exist.
    pub fn delete_schedule(&mut self, schedule_id: &str) -> Result<(), PersistenceError> {
        mutations::schedules::delete_schedule(&mut self.conn, schedule_id)
    }

    /// Deletes every schedule whose start is strictly before `now` and
    /// returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_past_schedules(
        &mut self,
        now: OffsetDateTime,
    ) -> Result<usize, PersistenceError> {
        mutations::schedules::delete_past_schedules(&mut self.conn, now)
    }

    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------

    /// Inserts a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including a duplicate
    /// login code.
    pub fn insert_account(&mut self, account: &Account) -> Result<(), PersistenceError> {
        mutations::accounts::insert_account(&mut self.conn, account)
    }

    /// Loads an account by id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the account does not exist.
    pub fn get_account(&mut self, account_id: &str) -> Result<Account, PersistenceError> {
        queries::accounts::get_account(&mut self.conn, account_id)
    }

    /// Looks up an account by its login code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. A missing account is `Ok(None)`.
    pub fn find_account_by_login_code(
        &mut self,
        login_code: &str,
    ) -> Result<Option<Account>, PersistenceError> {
        queries::accounts::find_account_by_login_code(&mut self.conn, login_code)
    }

    /// Loads every account, ordered by nickname.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_accounts(&mut self) -> Result<Vec<Account>, PersistenceError> {
        queries::accounts::list_accounts(&mut self.conn)
    }

    /// Counts stored accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_accounts(&mut self) -> Result<i64, PersistenceError> {
        queries::accounts::count_accounts(&mut self.conn)
    }

    /// Deletes an account and, via foreign key cascade, its characters
    /// and sessions.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the account does not exist.
    pub fn delete_account(&mut self, account_id: &str) -> Result<(), PersistenceError> {
        mutations::accounts::delete_account(&mut self.conn, account_id)
    }

    // ------------------------------------------------------------------
    // Characters
    // ------------------------------------------------------------------

    /// Inserts a new character.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails.
    pub fn insert_character(&mut self, character: &Character) -> Result<(), PersistenceError> {
        mutations::characters::insert_character(&mut self.conn, character)
    }

    /// Overwrites a character's nickname and job list.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the character does not exist.
    pub fn update_character(&mut self, character: &Character) -> Result<(), PersistenceError> {
        mutations::characters::update_character(&mut self.conn, character)
    }

    /// Deletes a character.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the character does not exist.
    pub fn delete_character(&mut self, character_id: &str) -> Result<(), PersistenceError> {
        mutations::characters::delete_character(&mut self.conn, character_id)
    }

    /// Loads a character by id.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the character does not exist.
    pub fn get_character(&mut self, character_id: &str) -> Result<Character, PersistenceError> {
        queries::characters::get_character(&mut self.conn, character_id)
    }

    /// Loads every character owned by an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_characters_by_account(
        &mut self,
        account_id: &str,
    ) -> Result<Vec<Character>, PersistenceError> {
        queries::characters::list_characters_by_account(&mut self.conn, account_id)
    }

    /// Loads every character nickname, for advisory uniqueness checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_character_nicknames(&mut self) -> Result<Vec<String>, PersistenceError> {
        queries::characters::list_character_nicknames(&mut self.conn)
    }

    // ------------------------------------------------------------------
    // Game events
    // ------------------------------------------------------------------

    /// Inserts a new game event.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_event(&mut self, event: &GameEvent) -> Result<(), PersistenceError> {
        mutations::events::insert_event(&mut self.conn, event)
    }

    /// Deletes a game event.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if the event does not exist.
    pub fn delete_event(&mut self, event_id: &str) -> Result<(), PersistenceError> {
        mutations::events::delete_event(&mut self.conn, event_id)
    }

    /// Loads every game event, ordered by end date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_events(&mut self) -> Result<Vec<GameEvent>, PersistenceError> {
        queries::events::list_events(&mut self.conn)
    }

    /// Deletes every event whose visibility window has closed and
    /// returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if a query or delete fails.
    pub fn delete_expired_events(
        &mut self,
        now: OffsetDateTime,
    ) -> Result<usize, PersistenceError> {
        mutations::events::delete_expired_events(&mut self.conn, now)
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Creates a session for an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_session(
        &mut self,
        session_token: &str,
        account_id: &str,
        now: OffsetDateTime,
        ttl: Duration,
    ) -> Result<(), PersistenceError> {
        mutations::sessions::create_session(&mut self.conn, session_token, account_id, now, ttl)
    }

    /// Loads a session by token.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SessionNotFound` if the token is unknown.
    pub fn get_session(&mut self, session_token: &str) -> Result<SessionData, PersistenceError> {
        queries::sessions::get_session(&mut self.conn, session_token)
    }

    /// Records activity on a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_session_activity(
        &mut self,
        session_token: &str,
        now: OffsetDateTime,
    ) -> Result<(), PersistenceError> {
        mutations::sessions::update_session_activity(&mut self.conn, session_token, now)
    }

    /// Deletes a session, logging the account out.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SessionNotFound` if the token is unknown.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::sessions::delete_session(&mut self.conn, session_token)
    }

    /// Deletes every session past its expiry and returns how many were
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_expired_sessions(
        &mut self,
        now: OffsetDateTime,
    ) -> Result<usize, PersistenceError> {
        mutations::sessions::delete_expired_sessions(&mut self.conn, now)
    }
}
