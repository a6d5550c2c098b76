// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule document store tests: round-trips, compare-and-swap
//! conflicts, ordering, and the past-schedule purge.

use time::macros::datetime;

use party_roster_domain::Schedule;

use crate::{PersistenceError, SqlitePersistence};

use super::create_test_schedule;

#[test]
fn test_insert_and_read_round_trip() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    let schedule: Schedule = create_test_schedule("sched-1", "2026-09-04", "21:00");

    db.insert_schedule(&schedule).unwrap();
    let (loaded, version) = db.get_schedule("sched-1").unwrap();

    assert_eq!(loaded, schedule);
    assert_eq!(version, 1);
    assert!(!loaded.is_closed);
    assert!(loaded.members.is_empty());
}

#[test]
fn test_get_missing_schedule_is_not_found() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();

    let result = db.get_schedule("sched-ghost");

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_cas_update_bumps_version() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    let mut schedule: Schedule = create_test_schedule("sched-1", "2026-09-04", "21:00");
    db.insert_schedule(&schedule).unwrap();

    schedule.note = String::from("bring potions");
    let new_version = db.update_schedule_cas(&schedule, 1).unwrap();

    assert_eq!(new_version, 2);
    let (loaded, version) = db.get_schedule("sched-1").unwrap();
    assert_eq!(loaded.note, "bring potions");
    assert_eq!(version, 2);
}

#[test]
fn test_stale_write_is_rejected_with_conflict() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    let schedule: Schedule = create_test_schedule("sched-1", "2026-09-04", "21:00");
    db.insert_schedule(&schedule).unwrap();

    // Two writers read version 1. The first lands, the second observes
    // a version mismatch.
    let mut first: Schedule = schedule.clone();
    first.note = String::from("first writer");
    db.update_schedule_cas(&first, 1).unwrap();

    let mut second: Schedule = schedule;
    second.note = String::from("second writer");
    let result = db.update_schedule_cas(&second, 1);

    assert!(matches!(
        result,
        Err(PersistenceError::Conflict {
            expected_version: 1,
            ..
        })
    ));

    // The first write is untouched.
    let (loaded, version) = db.get_schedule("sched-1").unwrap();
    assert_eq!(loaded.note, "first writer");
    assert_eq!(version, 2);
}

#[test]
fn test_cas_update_of_missing_schedule_is_not_found() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    let schedule: Schedule = create_test_schedule("sched-ghost", "2026-09-04", "21:00");

    let result = db.update_schedule_cas(&schedule, 1);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_list_schedules_ordered_by_date_then_time() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_schedule(&create_test_schedule("sched-late", "2026-09-05", "10:00"))
        .unwrap();
    db.insert_schedule(&create_test_schedule("sched-evening", "2026-09-04", "21:00"))
        .unwrap();
    db.insert_schedule(&create_test_schedule("sched-morning", "2026-09-04", "09:00"))
        .unwrap();

    let schedules: Vec<Schedule> = db.list_schedules().unwrap();
    let ids: Vec<&str> = schedules.iter().map(|s| s.id.as_str()).collect();

    assert_eq!(ids, vec!["sched-morning", "sched-evening", "sched-late"]);
}

#[test]
fn test_delete_schedule() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_schedule(&create_test_schedule("sched-1", "2026-09-04", "21:00"))
        .unwrap();

    db.delete_schedule("sched-1").unwrap();

    assert_eq!(db.count_schedules().unwrap(), 0);
    assert!(matches!(
        db.delete_schedule("sched-1"),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_purge_deletes_exactly_strictly_past_schedules() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_schedule(&create_test_schedule("sched-past", "2026-09-01", "09:00"))
        .unwrap();
    db.insert_schedule(&create_test_schedule("sched-now", "2026-09-01", "12:00"))
        .unwrap();
    db.insert_schedule(&create_test_schedule("sched-future", "2026-09-04", "21:00"))
        .unwrap();

    let now = datetime!(2026-09-01 12:00 UTC);
    let deleted = db.delete_past_schedules(now).unwrap();

    // The schedule starting exactly at the cutoff is not strictly past.
    assert_eq!(deleted, 1);
    let remaining: Vec<Schedule> = db.list_schedules().unwrap();
    let ids: Vec<&str> = remaining.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["sched-now", "sched-future"]);
}

#[test]
fn test_purge_catches_starts_within_the_current_minute() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_schedule(&create_test_schedule("sched-just-started", "2026-09-01", "12:00"))
        .unwrap();
    db.insert_schedule(&create_test_schedule("sched-next-minute", "2026-09-01", "12:01"))
        .unwrap();

    // A 12:00 start is strictly past once the clock reads 12:00:45.
    let now = datetime!(2026-09-01 12:00:45 UTC);
    let deleted = db.delete_past_schedules(now).unwrap();

    assert_eq!(deleted, 1);
    let remaining: Vec<Schedule> = db.list_schedules().unwrap();
    assert_eq!(remaining[0].id, "sched-next-minute");
}

#[test]
fn test_purge_is_idempotent() {
    let mut db = SqlitePersistence::new_in_memory().unwrap();
    db.insert_schedule(&create_test_schedule("sched-past", "2026-08-30", "09:00"))
        .unwrap();

    let now = datetime!(2026-09-01 12:00 UTC);
    assert_eq!(db.delete_past_schedules(now).unwrap(), 1);
    assert_eq!(db.delete_past_schedules(now).unwrap(), 0);
}
