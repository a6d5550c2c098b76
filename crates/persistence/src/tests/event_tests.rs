// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game event storage tests.

use time::macros::datetime;

use party_roster_domain::GameEvent;

use crate::{PersistenceError, SqlitePersistence};

use super::create_test_event;

#[test]
fn test_event_round_trip() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    let event: GameEvent = create_test_event("event-1", "Harvest Festival", "2026-09-10", "23:59");

    db.insert_event(&event).unwrap();
    let events: Vec<GameEvent> = db.list_events().unwrap();

    assert_eq!(events, vec![event]);
}

#[test]
fn test_list_events_ordered_by_end_date_then_time() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_event(&create_test_event(
        "event-late",
        "Winter Market",
        "2026-09-12",
        "12:00",
    ))
    .unwrap();
    db.insert_event(&create_test_event(
        "event-evening",
        "Harvest Festival",
        "2026-09-10",
        "22:00",
    ))
    .unwrap();
    db.insert_event(&create_test_event(
        "event-morning",
        "Fishing Derby",
        "2026-09-10",
        "09:00",
    ))
    .unwrap();

    let events: Vec<GameEvent> = db.list_events().unwrap();
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();

    assert_eq!(ids, vec!["event-morning", "event-evening", "event-late"]);
}

#[test]
fn test_delete_event() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_event(&create_test_event(
        "event-1",
        "Harvest Festival",
        "2026-09-10",
        "23:59",
    ))
    .unwrap();

    db.delete_event("event-1").unwrap();

    assert!(db.list_events().unwrap().is_empty());
    assert!(matches!(
        db.delete_event("event-1"),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_delete_expired_events_honors_grace_period() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    // Ended two days ago, well past the 24 hour grace window.
    db.insert_event(&create_test_event(
        "event-gone",
        "Fishing Derby",
        "2026-08-30",
        "12:00",
    ))
    .unwrap();
    // Ended 12 hours ago, still within the grace window.
    db.insert_event(&create_test_event(
        "event-grace",
        "Harvest Festival",
        "2026-09-01",
        "00:00",
    ))
    .unwrap();
    // Has not ended yet.
    db.insert_event(&create_test_event(
        "event-live",
        "Winter Market",
        "2026-09-10",
        "23:59",
    ))
    .unwrap();

    let now = datetime!(2026-09-01 12:00 UTC);
    let deleted = db.delete_expired_events(now).unwrap();

    assert_eq!(deleted, 1);
    let remaining: Vec<GameEvent> = db.list_events().unwrap();
    let ids: Vec<&str> = remaining.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["event-grace", "event-live"]);
}

#[test]
fn test_delete_expired_events_is_idempotent() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_event(&create_test_event(
        "event-gone",
        "Fishing Derby",
        "2026-08-28",
        "12:00",
    ))
    .unwrap();

    let now = datetime!(2026-09-01 12:00 UTC);
    assert_eq!(db.delete_expired_events(now).unwrap(), 1);
    assert_eq!(db.delete_expired_events(now).unwrap(), 0);
}
