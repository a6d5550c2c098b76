// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session storage tests.

use time::Duration;
use time::macros::datetime;

use crate::{PersistenceError, SessionData, SqlitePersistence};

use super::{create_test_account, test_now};

#[test]
fn test_session_round_trip() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_account(&create_test_account("acct-1", "ABC234", "Aria"))
        .unwrap();

    db.create_session("token-1", "acct-1", test_now(), Duration::hours(24))
        .unwrap();
    let session: SessionData = db.get_session("token-1").unwrap();

    assert_eq!(session.session_token, "token-1");
    assert_eq!(session.account_id, "acct-1");
    assert_eq!(session.created_at, session.last_activity_at);
}

#[test]
fn test_get_missing_session() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();

    let result = db.get_session("token-ghost");

    assert!(matches!(result, Err(PersistenceError::SessionNotFound(_))));
}

#[test]
fn test_session_expiry_boundary() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_account(&create_test_account("acct-1", "ABC234", "Aria"))
        .unwrap();
    db.create_session("token-1", "acct-1", test_now(), Duration::hours(24))
        .unwrap();

    let session: SessionData = db.get_session("token-1").unwrap();

    assert!(!session.is_expired(test_now()).unwrap());
    assert!(
        !session
            .is_expired(datetime!(2026-09-02 11:59 UTC))
            .unwrap()
    );
    // The expiry instant itself counts as expired.
    assert!(
        session
            .is_expired(datetime!(2026-09-02 12:00 UTC))
            .unwrap()
    );
}

#[test]
fn test_update_session_activity() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_account(&create_test_account("acct-1", "ABC234", "Aria"))
        .unwrap();
    db.create_session("token-1", "acct-1", test_now(), Duration::hours(24))
        .unwrap();

    let later = datetime!(2026-09-01 14:30 UTC);
    db.update_session_activity("token-1", later).unwrap();

    let session: SessionData = db.get_session("token-1").unwrap();
    assert_ne!(session.created_at, session.last_activity_at);
}

#[test]
fn test_delete_session() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_account(&create_test_account("acct-1", "ABC234", "Aria"))
        .unwrap();
    db.create_session("token-1", "acct-1", test_now(), Duration::hours(24))
        .unwrap();

    db.delete_session("token-1").unwrap();

    assert!(matches!(
        db.delete_session("token-1"),
        Err(PersistenceError::SessionNotFound(_))
    ));
}

#[test]
fn test_delete_expired_sessions() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_account(&create_test_account("acct-1", "ABC234", "Aria"))
        .unwrap();
    db.create_session("token-short", "acct-1", test_now(), Duration::hours(1))
        .unwrap();
    db.create_session("token-long", "acct-1", test_now(), Duration::hours(24))
        .unwrap();

    let later = datetime!(2026-09-01 14:00 UTC);
    let deleted = db.delete_expired_sessions(later).unwrap();

    assert_eq!(deleted, 1);
    assert!(matches!(
        db.get_session("token-short"),
        Err(PersistenceError::SessionNotFound(_))
    ));
    assert!(db.get_session("token-long").is_ok());
}

#[test]
fn test_delete_account_cascades_to_sessions() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_account(&create_test_account("acct-1", "ABC234", "Aria"))
        .unwrap();
    db.create_session("token-1", "acct-1", test_now(), Duration::hours(24))
        .unwrap();

    db.delete_account("acct-1").unwrap();

    assert!(matches!(
        db.get_session("token-1"),
        Err(PersistenceError::SessionNotFound(_))
    ));
}
