// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Connection establishment, migration application, and foreign key
//! enforcement are also exercised implicitly by every other persistence
//! test through `SqlitePersistence::new_in_memory()`.

use crate::SqlitePersistence;

use super::create_test_account;

#[test]
fn test_persistence_initialization() {
    let result: Result<SqlitePersistence, crate::PersistenceError> =
        SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    // Each in-memory instance should be isolated
    let mut db1 = SqlitePersistence::new_in_memory().unwrap();
    let mut db2 = SqlitePersistence::new_in_memory().unwrap();

    db1.insert_account(&create_test_account("acct-1", "ABC234", "Aria"))
        .unwrap();

    let count1 = db1.count_accounts().unwrap();
    let count2 = db2.count_accounts().unwrap();

    assert_eq!(count1, 1, "db1 should have 1 account");
    assert_eq!(count2, 0, "db2 should have 0 accounts (isolated)");
}

#[test]
fn test_migrations_applied_on_initialization() {
    // If migrations didn't run, the schema wouldn't exist and this would fail
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.list_schedules();

    assert!(
        result.is_ok(),
        "Migrations must have applied for the schedules table to exist"
    );
}
