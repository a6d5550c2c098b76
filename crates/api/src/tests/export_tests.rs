// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for CSV export of the schedule roster.

use party_roster_domain::{
    ContentType, Difficulty, JobClass, MemberIdentity, PartyMember, Schedule, ScheduleDate,
    ScheduleTime,
};
use time::macros::datetime;

use crate::export::export_schedules_csv;

fn create_test_schedule() -> Schedule {
    Schedule {
        id: String::from("sched-1"),
        title: String::from("Weekly raid"),
        content_type: ContentType::Raid,
        content_name: String::from("Glas Ghaibhleann"),
        difficulty: Difficulty::Hard,
        date: ScheduleDate::parse("2026-09-05").unwrap(),
        time: ScheduleTime::parse("20:30").unwrap(),
        max_members: 4,
        leader_nickname: String::from("Mira"),
        leader_job: JobClass::Bard,
        leader_character_id: None,
        creator_account_id: String::from("acct-1"),
        is_closed: false,
        note: String::from("bring potions"),
        members: vec![PartyMember {
            identity: MemberIdentity::ad_hoc(),
            nickname: String::from("Kael"),
            job: JobClass::Healer,
            joined_at: datetime!(2026-08-01 12:00 UTC),
        }],
        created_at: datetime!(2026-08-01 12:00 UTC),
        updated_at: datetime!(2026-08-01 12:00 UTC),
    }
}

#[test]
fn test_export_header_has_fixed_member_columns() {
    let output: String = export_schedules_csv(&[]).unwrap();
    let header: &str = output.lines().next().unwrap();
    assert_eq!(
        header,
        "date,time,type,content,difficulty,title,leader,\
         member_1,member_2,member_3,member_4,member_5,member_6,member_7,note"
    );
}

#[test]
fn test_export_renders_leader_and_members_with_jobs() {
    let schedule: Schedule = create_test_schedule();
    let output: String = export_schedules_csv(&[schedule]).unwrap();
    let row: &str = output.lines().nth(1).unwrap();

    assert!(row.contains("2026-09-05"));
    assert!(row.contains("20:30"));
    assert!(row.contains("Mira (Bard)"));
    assert!(row.contains("Kael (Healer)"));
    assert!(row.contains("bring potions"));
}

#[test]
fn test_export_pads_empty_seats() {
    let schedule: Schedule = create_test_schedule();
    let output: String = export_schedules_csv(&[schedule]).unwrap();
    let row: &str = output.lines().nth(1).unwrap();

    // One member occupied, six empty member cells before the note.
    assert!(row.contains("Kael (Healer),,,,,,,bring potions"));
}

#[test]
fn test_export_orders_rows_like_input() {
    let mut first: Schedule = create_test_schedule();
    first.title = String::from("First");
    let mut second: Schedule = create_test_schedule();
    second.id = String::from("sched-2");
    second.title = String::from("Second");

    let output: String = export_schedules_csv(&[first, second]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("First"));
    assert!(lines[2].contains("Second"));
}
