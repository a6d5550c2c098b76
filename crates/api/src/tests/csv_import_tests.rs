// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for CSV preview and bulk import.

use party_roster_domain::{
    ContentType, Difficulty, JobClass, MemberIdentity, PartyMember, ScheduleTime,
};

use crate::csv_import::{
    self, CsvImportResult, CsvPreviewResult, CsvRowStatus, DEFAULT_LEADER_NICKNAME,
    DEFAULT_MAX_MEMBERS, import_csv_schedules, preview_csv_schedules,
};
use crate::error::ApiError;
use crate::tests::{TestFixture, setup, test_now};

#[test]
fn test_preview_requires_admin() {
    let fixture: TestFixture = setup();

    let result = preview_csv_schedules("date\n2026-09-01\n", &fixture.user, test_now());

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_missing_date_header_is_rejected() {
    let fixture: TestFixture = setup();
    let csv: &str = "title,leader\nRaid night,Mira\n";

    let result = preview_csv_schedules(csv, &fixture.admin, test_now());

    assert!(matches!(result, Err(ApiError::InvalidCsvFormat { .. })));
}

#[test]
fn test_header_matching_is_case_and_space_insensitive() {
    let fixture: TestFixture = setup();
    let csv: &str = " Date ,Max Members\n2026-09-01,4\n";

    let preview: CsvPreviewResult =
        preview_csv_schedules(csv, &fixture.admin, test_now()).unwrap();

    assert_eq!(preview.valid_count, 1);
}

#[test]
fn test_row_with_only_date_uses_defaults() {
    let mut fixture: TestFixture = setup();

    let result: CsvImportResult = import_csv_schedules(
        &mut fixture.db,
        &fixture.admin,
        "date\n2026-09-01\n",
        test_now(),
    )
    .unwrap();
    assert_eq!(result.imported_count, 1);

    let schedules = fixture.db.list_schedules().unwrap();
    assert_eq!(schedules.len(), 1);
    let schedule = &schedules[0];
    assert_eq!(schedule.time, ScheduleTime::midnight());
    assert_eq!(schedule.content_type, ContentType::Raid);
    assert_eq!(schedule.difficulty, Difficulty::Beginner);
    assert_eq!(schedule.max_members, DEFAULT_MAX_MEMBERS);
    assert_eq!(schedule.leader_nickname, DEFAULT_LEADER_NICKNAME);
    assert_eq!(schedule.leader_job, JobClass::Undecided);
    assert!(schedule.members.is_empty());
    assert_eq!(schedule.creator_account_id, fixture.admin.id);
}

#[test]
fn test_malformed_date_fails_the_row() {
    let fixture: TestFixture = setup();
    let csv: &str = "date\n2026-09-01\nnot-a-date\n";

    let preview: CsvPreviewResult =
        preview_csv_schedules(csv, &fixture.admin, test_now()).unwrap();

    assert_eq!(preview.total_rows, 2);
    assert_eq!(preview.valid_count, 1);
    assert_eq!(preview.invalid_count, 1);
    assert_eq!(preview.rows[1].status, CsvRowStatus::Invalid);
    assert!(preview.rows[1].errors[0].starts_with("date:"));
}

#[test]
fn test_members_cell_parses_nick_and_job_pairs() {
    let mut fixture: TestFixture = setup();
    let csv: &str = "date,members\n2026-09-01,Mira:Bard|Kael:Healer\n";

    import_csv_schedules(&mut fixture.db, &fixture.admin, csv, test_now()).unwrap();

    let schedules = fixture.db.list_schedules().unwrap();
    let members = &schedules[0].members;
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].nickname, "Mira");
    assert_eq!(members[0].job, JobClass::Bard);
    assert_eq!(members[1].nickname, "Kael");
    assert_eq!(members[1].job, JobClass::Healer);
    assert!(matches!(members[0].identity, MemberIdentity::AdHoc { .. }));
}

#[test]
fn test_unknown_member_job_falls_back_to_undecided() {
    let members: Vec<PartyMember> =
        csv_import::parse_members_cell("Mira:Swordmaster", 8, test_now());

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].job, JobClass::Undecided);
}

#[test]
fn test_members_beyond_capacity_are_dropped() {
    let cell: &str = "A:Bard|B:Bard|C:Bard|D:Bard";

    let members: Vec<PartyMember> = csv_import::parse_members_cell(cell, 3, test_now());

    assert_eq!(members.len(), 2);
}

#[test]
fn test_out_of_range_capacity_falls_back_to_default() {
    let fixture: TestFixture = setup();
    let csv: &str = "date,max_members\n2026-09-01,40\n2026-09-02,1\n2026-09-03,abc\n";

    let preview: CsvPreviewResult =
        preview_csv_schedules(csv, &fixture.admin, test_now()).unwrap();

    assert_eq!(preview.valid_count, 3);
}

#[test]
fn test_import_skips_invalid_rows_and_keeps_valid_ones() {
    let mut fixture: TestFixture = setup();
    let csv: &str = "date,title\n2026-09-01,First\nbogus,Second\n2026-09-03,Third\n";

    let result: CsvImportResult =
        import_csv_schedules(&mut fixture.db, &fixture.admin, csv, test_now()).unwrap();

    assert_eq!(result.imported_count, 2);
    assert_eq!(result.failed_count, 1);
    assert_eq!(fixture.db.count_schedules().unwrap(), 2);
}

#[test]
fn test_preview_does_not_persist() {
    let mut fixture: TestFixture = setup();

    let preview: CsvPreviewResult =
        preview_csv_schedules("date\n2026-09-01\n", &fixture.admin, test_now()).unwrap();

    assert_eq!(preview.valid_count, 1);
    assert_eq!(fixture.db.count_schedules().unwrap(), 0);
}
