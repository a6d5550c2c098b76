// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for character management.

use party_roster_domain::{Character, JobClass};

use crate::characters;
use crate::error::ApiError;
use crate::request_response::{CreateCharacterRequest, UpdateCharacterRequest};
use crate::tests::{TestFixture, setup, test_now};

#[test]
fn test_create_character_owned_by_actor() {
    let mut fixture: TestFixture = setup();

    let character: Character = characters::create_character(
        &mut fixture.db,
        &fixture.user,
        CreateCharacterRequest {
            nickname: String::from("MiraAlt"),
            jobs: vec![String::from("Ice Mage"), String::from("Priest")],
        },
        test_now(),
    )
    .unwrap();

    assert_eq!(character.account_id, fixture.user.id);
    assert_eq!(character.jobs, vec![JobClass::IceMage, JobClass::Priest]);
    assert_eq!(character.primary_job(), JobClass::IceMage);
}

#[test]
fn test_guest_cannot_create_character() {
    let mut fixture: TestFixture = setup();

    let result = characters::create_character(
        &mut fixture.db,
        &fixture.guest,
        CreateCharacterRequest {
            nickname: String::from("WrenAlt"),
            jobs: vec![String::from("Bard")],
        },
        test_now(),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_create_rejects_unknown_job() {
    let mut fixture: TestFixture = setup();

    let result = characters::create_character(
        &mut fixture.db,
        &fixture.user,
        CreateCharacterRequest {
            nickname: String::from("MiraAlt"),
            jobs: vec![String::from("Necromancer")],
        },
        test_now(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "job"
    ));
}

#[test]
fn test_update_character_partial_fields() {
    let mut fixture: TestFixture = setup();

    let updated: Character = characters::update_character(
        &mut fixture.db,
        &fixture.user,
        &fixture.user_character.id,
        UpdateCharacterRequest {
            jobs: Some(vec![String::from("Monk")]),
            ..UpdateCharacterRequest::default()
        },
    )
    .unwrap();

    // Nickname untouched, jobs replaced.
    assert_eq!(updated.nickname, fixture.user_character.nickname);
    assert_eq!(updated.jobs, vec![JobClass::Monk]);
}

#[test]
fn test_cannot_update_someone_elses_character() {
    let mut fixture: TestFixture = setup();

    let result = characters::update_character(
        &mut fixture.db,
        &fixture.user,
        &fixture.admin_character.id,
        UpdateCharacterRequest {
            nickname: Some(String::from("Stolen")),
            ..UpdateCharacterRequest::default()
        },
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_admin_can_update_any_character() {
    let mut fixture: TestFixture = setup();

    let updated: Character = characters::update_character(
        &mut fixture.db,
        &fixture.admin,
        &fixture.user_character.id,
        UpdateCharacterRequest {
            nickname: Some(String::from("Renamed")),
            ..UpdateCharacterRequest::default()
        },
    )
    .unwrap();

    assert_eq!(updated.nickname, "Renamed");
}

#[test]
fn test_delete_character_owner_only() {
    let mut fixture: TestFixture = setup();

    let result = characters::delete_character(
        &mut fixture.db,
        &fixture.user,
        &fixture.admin_character.id,
    );
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));

    characters::delete_character(&mut fixture.db, &fixture.user, &fixture.user_character.id)
        .unwrap();
    let remaining = fixture
        .db
        .list_characters_by_account(&fixture.user.id)
        .unwrap();
    assert!(remaining.is_empty());
}

#[test]
fn test_list_my_characters_excludes_others() {
    let mut fixture: TestFixture = setup();

    let mine = characters::list_my_characters(&mut fixture.db, &fixture.user).unwrap();

    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, fixture.user_character.id);
}

#[test]
fn test_nickname_availability_is_case_insensitive() {
    let mut fixture: TestFixture = setup();

    // "MiraMain" is taken by the fixture character.
    assert!(!characters::check_nickname_availability(&mut fixture.db, "miramain").unwrap());
    assert!(characters::check_nickname_availability(&mut fixture.db, "Brandnew").unwrap());
}

#[test]
fn test_taken_nickname_does_not_block_creation() {
    let mut fixture: TestFixture = setup();

    let character: Character = characters::create_character(
        &mut fixture.db,
        &fixture.user,
        CreateCharacterRequest {
            nickname: fixture.admin_character.nickname.clone(),
            jobs: vec![String::from("Bard")],
        },
        test_now(),
    )
    .unwrap();

    assert_eq!(character.nickname, fixture.admin_character.nickname);
}
