// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod account_tests;
mod character_tests;
mod csv_import_tests;
mod export_tests;

use time::OffsetDateTime;
use time::macros::datetime;

use party_roster_domain::{Account, Character, JobClass, LoginCode, Role};
use party_roster_persistence::SqlitePersistence;

use crate::request_response::CreateScheduleRequest;

pub fn test_now() -> OffsetDateTime {
    datetime!(2026-09-01 12:00 UTC)
}

/// Three accounts, one per role, with one character each for the admin
/// and the user.
pub struct TestFixture {
    pub db: SqlitePersistence,
    pub admin: Account,
    pub user: Account,
    pub guest: Account,
    pub admin_character: Character,
    pub user_character: Character,
}

pub fn setup() -> TestFixture {
    let mut db = SqlitePersistence::new_in_memory().expect("Failed to create persistence");

    let admin: Account = create_test_account("acct-admin", "AAAAAA", "Aria", Role::Admin);
    let user: Account = create_test_account("acct-user", "BBBBBB", "Mira", Role::User);
    let guest: Account = create_test_account("acct-guest", "CCCCCC", "Wren", Role::Guest);
    db.insert_account(&admin).unwrap();
    db.insert_account(&user).unwrap();
    db.insert_account(&guest).unwrap();

    let admin_character: Character =
        create_test_character("char-admin", &admin.id, "AriaMain", JobClass::Healer);
    let user_character: Character =
        create_test_character("char-user", &user.id, "MiraMain", JobClass::Bard);
    db.insert_character(&admin_character).unwrap();
    db.insert_character(&user_character).unwrap();

    TestFixture {
        db,
        admin,
        user,
        guest,
        admin_character,
        user_character,
    }
}

pub fn create_test_account(id: &str, code: &str, nickname: &str, role: Role) -> Account {
    Account {
        id: id.to_string(),
        nickname: nickname.to_string(),
        role,
        login_code: LoginCode::parse(code).unwrap(),
        created_at: test_now(),
    }
}

pub fn create_test_character(
    id: &str,
    account_id: &str,
    nickname: &str,
    job: JobClass,
) -> Character {
    Character {
        id: id.to_string(),
        account_id: account_id.to_string(),
        nickname: nickname.to_string(),
        jobs: vec![job],
        created_at: test_now(),
    }
}

/// A well-formed create request for a run the day after `test_now`.
pub fn create_test_request(title: &str) -> CreateScheduleRequest {
    CreateScheduleRequest {
        title: title.to_string(),
        content_type: String::from("Raid"),
        content_name: String::from("Glas Ghaibhleann"),
        difficulty: String::from("Hard"),
        date: String::from("2026-09-02"),
        time: String::from("20:00"),
        max_members: 4,
        leader_nickname: String::from("Aria"),
        leader_job: String::from("Healer"),
        leader_character_id: Some(String::from("char-admin")),
        note: String::new(),
    }
}
