// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod event_tests;
mod initialization_tests;
mod schedule_tests;
mod session_tests;

use time::OffsetDateTime;
use time::macros::datetime;

use party_roster_domain::{
    Account, Character, ContentType, Difficulty, GameEvent, JobClass, LoginCode, Role, Schedule,
    ScheduleDate, ScheduleDraft, ScheduleTime,
};

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-09-01 12:00 UTC)
}

pub fn create_test_schedule(id: &str, date: &str, time: &str) -> Schedule {
    party_roster::create_schedule(
        id.to_string(),
        String::from("acct-creator"),
        ScheduleDraft {
            title: String::from("Friday night run"),
            content_type: ContentType::Raid,
            content_name: String::from("Glas Ghaibhleann"),
            difficulty: Difficulty::Hard,
            date: ScheduleDate::parse(date).unwrap(),
            time: ScheduleTime::parse(time).unwrap(),
            max_members: 4,
            leader_nickname: String::from("Aria"),
            leader_job: JobClass::Healer,
            leader_character_id: Some(String::from("char-leader")),
            note: String::new(),
        },
        test_now(),
    )
    .unwrap()
}

pub fn create_test_account(id: &str, code: &str, nickname: &str) -> Account {
    Account {
        id: id.to_string(),
        nickname: nickname.to_string(),
        role: Role::User,
        login_code: LoginCode::parse(code).unwrap(),
        created_at: test_now(),
    }
}

pub fn create_test_character(id: &str, account_id: &str, nickname: &str) -> Character {
    Character {
        id: id.to_string(),
        account_id: account_id.to_string(),
        nickname: nickname.to_string(),
        jobs: vec![JobClass::Healer, JobClass::Bard],
        created_at: test_now(),
    }
}

pub fn create_test_event(id: &str, name: &str, end_date: &str, end_time: &str) -> GameEvent {
    GameEvent {
        id: id.to_string(),
        name: name.to_string(),
        end_date: ScheduleDate::parse(end_date).unwrap(),
        end_time: ScheduleTime::parse(end_time).unwrap(),
        created_at: test_now(),
    }
}
