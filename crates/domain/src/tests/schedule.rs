// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::macros::datetime;
use time::OffsetDateTime;

use crate::{
    Account, ContentType, Difficulty, JobClass, LoginCode, MemberIdentity, PartyMember,
    RecruitmentStatus, Role, Schedule, ScheduleDate, ScheduleTime,
};

fn create_test_schedule() -> Schedule {
    Schedule {
        id: String::from("sched-1"),
        title: String::from("Friday night run"),
        content_type: ContentType::Raid,
        content_name: String::from("Glas Ghaibhleann"),
        difficulty: Difficulty::Hard,
        date: ScheduleDate::parse("2026-09-04").unwrap(),
        time: ScheduleTime::parse("21:00").unwrap(),
        max_members: 4,
        leader_nickname: String::from("Aria"),
        leader_job: JobClass::Healer,
        leader_character_id: Some(String::from("char-leader")),
        creator_account_id: String::from("acct-creator"),
        is_closed: false,
        note: String::new(),
        members: Vec::new(),
        created_at: datetime!(2026-08-01 12:00 UTC),
        updated_at: datetime!(2026-08-01 12:00 UTC),
    }
}

fn create_test_member(character_id: &str, nickname: &str) -> PartyMember {
    PartyMember {
        identity: MemberIdentity::linked(character_id),
        nickname: nickname.to_string(),
        job: JobClass::Archer,
        joined_at: datetime!(2026-08-02 12:00 UTC),
    }
}

fn create_test_account(id: &str, role: Role) -> Account {
    Account {
        id: id.to_string(),
        nickname: String::from("Tester"),
        role,
        login_code: LoginCode::parse("ABC234").unwrap(),
        created_at: datetime!(2026-07-01 12:00 UTC),
    }
}

#[test]
fn test_open_schedule_reports_open() {
    let schedule: Schedule = create_test_schedule();
    let now: OffsetDateTime = datetime!(2026-09-01 12:00 UTC);
    assert_eq!(schedule.recruitment_status(now), RecruitmentStatus::Open);
}

#[test]
fn test_leader_occupies_implicit_seat() {
    let mut schedule: Schedule = create_test_schedule();
    assert_eq!(schedule.occupied_seats(), 1);
    assert!(!schedule.is_full());

    schedule.members.push(create_test_member("char-a", "Bren"));
    schedule.members.push(create_test_member("char-b", "Ciri"));
    assert_eq!(schedule.occupied_seats(), 3);
    assert!(!schedule.is_full());

    // Capacity 4 means three member seats plus the leader.
    schedule.members.push(create_test_member("char-c", "Dain"));
    assert_eq!(schedule.occupied_seats(), 4);
    assert!(schedule.is_full());
}

#[test]
fn test_full_schedule_reports_full() {
    let mut schedule: Schedule = create_test_schedule();
    schedule.members.push(create_test_member("char-a", "Bren"));
    schedule.members.push(create_test_member("char-b", "Ciri"));
    schedule.members.push(create_test_member("char-c", "Dain"));

    let now: OffsetDateTime = datetime!(2026-09-01 12:00 UTC);
    assert_eq!(schedule.recruitment_status(now), RecruitmentStatus::Full);
}

#[test]
fn test_closed_takes_precedence_over_full() {
    let mut schedule: Schedule = create_test_schedule();
    schedule.is_closed = true;
    schedule.members.push(create_test_member("char-a", "Bren"));
    schedule.members.push(create_test_member("char-b", "Ciri"));
    schedule.members.push(create_test_member("char-c", "Dain"));

    let now: OffsetDateTime = datetime!(2026-09-01 12:00 UTC);
    assert_eq!(schedule.recruitment_status(now), RecruitmentStatus::Closed);
}

#[test]
fn test_expired_takes_precedence_over_closed_and_full() {
    let mut schedule: Schedule = create_test_schedule();
    schedule.is_closed = true;
    schedule.members.push(create_test_member("char-a", "Bren"));
    schedule.members.push(create_test_member("char-b", "Ciri"));
    schedule.members.push(create_test_member("char-c", "Dain"));

    let now: OffsetDateTime = datetime!(2026-09-04 21:00 UTC);
    assert_eq!(schedule.recruitment_status(now), RecruitmentStatus::Expired);
}

#[test]
fn test_expiry_is_inclusive_of_start_instant() {
    let schedule: Schedule = create_test_schedule();
    let just_before: OffsetDateTime = datetime!(2026-09-04 20:59 UTC);
    let at_start: OffsetDateTime = datetime!(2026-09-04 21:00 UTC);

    assert!(!schedule.is_expired(just_before));
    assert!(schedule.is_expired(at_start));
}

#[test]
fn test_leader_display_combines_nickname_and_job() {
    let schedule: Schedule = create_test_schedule();
    assert_eq!(schedule.leader_display(), "Aria (Healer)");
}

#[test]
fn test_member_display_combines_nickname_and_job() {
    let member: PartyMember = create_test_member("char-a", "Bren");
    assert_eq!(member.display(), "Bren (Archer)");
}

#[test]
fn test_find_member_by_linked_identity() {
    let mut schedule: Schedule = create_test_schedule();
    schedule.members.push(create_test_member("char-a", "Bren"));

    let identity: MemberIdentity = MemberIdentity::linked("char-a");
    assert!(schedule.contains_member(&identity));
    assert_eq!(schedule.find_member(&identity).unwrap().nickname, "Bren");

    let absent: MemberIdentity = MemberIdentity::linked("char-z");
    assert!(!schedule.contains_member(&absent));
}

#[test]
fn test_ad_hoc_identities_are_distinct() {
    let first: MemberIdentity = MemberIdentity::ad_hoc();
    let second: MemberIdentity = MemberIdentity::ad_hoc();
    assert_ne!(first, second);
}

#[test]
fn test_is_led_by_matches_leader_character() {
    let schedule: Schedule = create_test_schedule();
    assert!(schedule.is_led_by("char-leader"));
    assert!(!schedule.is_led_by("char-a"));
}

#[test]
fn test_admin_can_edit_any_schedule() {
    let schedule: Schedule = create_test_schedule();
    let admin: Account = create_test_account("acct-other", Role::Admin);
    assert!(schedule.can_be_edited_by(&admin));
}

#[test]
fn test_creator_can_edit_own_schedule() {
    let schedule: Schedule = create_test_schedule();
    let creator: Account = create_test_account("acct-creator", Role::User);
    assert!(schedule.can_be_edited_by(&creator));
}

#[test]
fn test_unrelated_user_cannot_edit_schedule() {
    let schedule: Schedule = create_test_schedule();
    let stranger: Account = create_test_account("acct-stranger", Role::User);
    assert!(!schedule.can_be_edited_by(&stranger));
}

#[test]
fn test_guest_cannot_mutate() {
    let guest: Account = create_test_account("acct-guest", Role::Guest);
    let user: Account = create_test_account("acct-user", Role::User);
    assert!(!guest.can_mutate());
    assert!(user.can_mutate());
}
