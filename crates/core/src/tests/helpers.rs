// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::datetime;

use party_roster_domain::{
    ContentType, Difficulty, JobClass, MemberIdentity, PartyMember, Schedule, ScheduleDate,
    ScheduleDraft, ScheduleTime,
};

/// A fixed "now" well before the test schedule's start.
pub fn test_now() -> OffsetDateTime {
    datetime!(2026-09-01 12:00 UTC)
}

pub fn create_test_draft() -> ScheduleDraft {
    ScheduleDraft {
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
        note: String::new(),
    }
}

pub fn create_test_schedule() -> Schedule {
    crate::create_schedule(
        String::from("sched-1"),
        String::from("acct-creator"),
        create_test_draft(),
        test_now(),
    )
    .unwrap()
}

pub fn create_test_member(character_id: &str, nickname: &str) -> PartyMember {
    PartyMember {
        identity: MemberIdentity::linked(character_id),
        nickname: nickname.to_string(),
        job: JobClass::Archer,
        joined_at: test_now(),
    }
}
