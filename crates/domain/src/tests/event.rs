// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;

use crate::{GameEvent, ScheduleDate, ScheduleTime};

fn create_test_event(end_date: &str, end_time: &str) -> GameEvent {
    GameEvent {
        id: String::from("event-1"),
        name: String::from("Double drop weekend"),
        end_date: ScheduleDate::parse(end_date).unwrap(),
        end_time: ScheduleTime::parse(end_time).unwrap(),
        created_at: datetime!(2026-08-01 12:00 UTC),
    }
}

#[test]
fn test_event_visible_before_end() {
    let event: GameEvent = create_test_event("2026-09-07", "23:00");
    assert!(event.is_visible(datetime!(2026-09-03 18:00 UTC)));
}

#[test]
fn test_event_visible_through_grace_period() {
    let event: GameEvent = create_test_event("2026-09-07", "23:00");

    // Visibility ends exactly 24 hours after the end instant.
    assert!(event.is_visible(datetime!(2026-09-08 22:59 UTC)));
    assert!(!event.is_visible(datetime!(2026-09-08 23:00 UTC)));
}

#[test]
fn test_event_ends_at_combines_date_and_time() {
    let event: GameEvent = create_test_event("2026-09-07", "23:00");
    assert_eq!(
        event.ends_at().assume_utc(),
        datetime!(2026-09-07 23:00 UTC)
    );
}
