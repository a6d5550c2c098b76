// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for admin account management.

use party_roster_domain::LoginCode;

use crate::accounts;
use crate::error::ApiError;
use crate::request_response::{RegisterAccountRequest, RegisterAccountResponse};
use crate::tests::{TestFixture, setup, test_now};

#[test]
fn test_register_account_returns_a_usable_login_code() {
    let mut fixture: TestFixture = setup();

    let response: RegisterAccountResponse = accounts::register_account(
        &mut fixture.db,
        &fixture.admin,
        RegisterAccountRequest {
            nickname: String::from("Newcomer"),
            role: String::from("user"),
        },
        test_now(),
    )
    .unwrap();

    assert_eq!(response.nickname, "Newcomer");
    assert_eq!(response.role, "user");
    assert!(LoginCode::parse(&response.login_code).is_ok());

    let found = fixture
        .db
        .find_account_by_login_code(&response.login_code)
        .unwrap();
    assert_eq!(found.unwrap().id, response.account_id);
}

#[test]
fn test_register_account_is_admin_only() {
    let mut fixture: TestFixture = setup();

    let result = accounts::register_account(
        &mut fixture.db,
        &fixture.user,
        RegisterAccountRequest {
            nickname: String::from("Newcomer"),
            role: String::from("user"),
        },
        test_now(),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_register_rejects_unknown_role() {
    let mut fixture: TestFixture = setup();

    let result = accounts::register_account(
        &mut fixture.db,
        &fixture.admin,
        RegisterAccountRequest {
            nickname: String::from("Newcomer"),
            role: String::from("owner"),
        },
        test_now(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "role"
    ));
}

#[test]
fn test_register_rejects_blank_nickname() {
    let mut fixture: TestFixture = setup();

    let result = accounts::register_account(
        &mut fixture.db,
        &fixture.admin,
        RegisterAccountRequest {
            nickname: String::from("   "),
            role: String::from("user"),
        },
        test_now(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "nickname"
    ));
}

#[test]
fn test_list_accounts_is_admin_only() {
    let mut fixture: TestFixture = setup();

    let listed = accounts::list_accounts(&mut fixture.db, &fixture.admin).unwrap();
    assert_eq!(listed.len(), 3);

    let result = accounts::list_accounts(&mut fixture.db, &fixture.guest);
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_delete_account_removes_its_characters() {
    let mut fixture: TestFixture = setup();

    accounts::delete_account(&mut fixture.db, &fixture.admin, &fixture.user.id).unwrap();

    assert_eq!(fixture.db.count_accounts().unwrap(), 2);
    let orphaned = fixture
        .db
        .list_characters_by_account(&fixture.user.id)
        .unwrap();
    assert!(orphaned.is_empty());
}

#[test]
fn test_delete_missing_account_reports_not_found() {
    let mut fixture: TestFixture = setup();

    let result = accounts::delete_account(&mut fixture.db, &fixture.admin, "no-such-account");

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
