// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview and import for bulk schedule entry.
//!
//! Admins migrate rosters kept in spreadsheets by uploading a CSV. The
//! format is forgiving: only the `date` column is mandatory, every
//! other field falls back to a sensible default so half-filled sheets
//! still come through. Preview validates without persisting, import
//! writes the valid rows and reports the rest.

use std::collections::HashMap;

use csv::StringRecord;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use party_roster_domain::{
    Account, ContentType, Difficulty, JobClass, MAX_PARTY_SIZE, MIN_PARTY_SIZE, MemberIdentity,
    PartyMember, Schedule, ScheduleDate, ScheduleTime,
};
use party_roster_persistence::SqlitePersistence;

use crate::capabilities::AuthorizationService;
use crate::error::{ApiError, translate_persistence_error};

/// Capacity used when the CSV row does not carry a usable number.
pub(crate) const DEFAULT_MAX_MEMBERS: u8 = 8;

/// Leader nickname used when the CSV row leaves the leader blank.
pub(crate) const DEFAULT_LEADER_NICKNAME: &str = "(unknown)";

/// A single row result from CSV validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The parsed date (if valid).
    pub date: Option<String>,
    /// The parsed title (if present).
    pub title: Option<String>,
    /// The parsed leader nickname (if present).
    pub leader: Option<String>,
    /// The row status.
    pub status: CsvRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// Status of a CSV row validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CsvRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has validation errors and cannot be imported.
    Invalid,
}

/// Result of CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvPreviewResult {
    /// Per-row validation results.
    pub rows: Vec<CsvRowResult>,
    /// Total number of rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

/// Result of a CSV import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvImportResult {
    /// Per-row validation results.
    pub rows: Vec<CsvRowResult>,
    /// Number of schedules written.
    pub imported_count: usize,
    /// Number of rows skipped.
    pub failed_count: usize,
}

/// The only header a schedule CSV must carry.
const REQUIRED_HEADERS: &[&str] = &["date"];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();

    for (idx, header) in headers.iter().enumerate() {
        let normalized: String = normalize_header(header);
        header_map.insert(normalized, idx);
    }

    let mut missing: Vec<String> = Vec::new();
    for required in REQUIRED_HEADERS {
        if !header_map.contains_key(*required) {
            missing.push(String::from(*required));
        }
    }

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Parses the `members` cell, `nick:job` entries separated by `|`.
///
/// A job that fails to parse falls back to Undecided rather than
/// failing the row. Entries beyond the member seat count are dropped.
pub(crate) fn parse_members_cell(
    cell: &str,
    max_members: u8,
    now: OffsetDateTime,
) -> Vec<PartyMember> {
    let member_seats: usize = usize::from(max_members.saturating_sub(1));

    cell.split('|')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .take(member_seats)
        .map(|entry| {
            let (nickname, job_str) = entry
                .split_once(':')
                .map_or((entry, ""), |(n, j)| (n.trim(), j.trim()));

            let job: JobClass = JobClass::parse(job_str).unwrap_or(JobClass::Undecided);

            PartyMember {
                identity: MemberIdentity::ad_hoc(),
                nickname: nickname.to_string(),
                job,
                joined_at: now,
            }
        })
        .collect()
}

/// Parses a CSV row into a `Schedule` if possible.
///
/// Everything except the date is defaulted when missing or malformed.
/// Imported rows bypass the draft rules on purpose: spreadsheet data
/// routinely lacks a title or content name, and rejecting those rows
/// would strand exactly the schedules the import exists to migrate.
fn parse_csv_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    creator_account_id: &str,
    now: OffsetDateTime,
) -> Result<Schedule, Vec<String>> {
    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let Some(date_str) = get_field("date") else {
        return Err(vec![String::from("date: required field is missing or empty")]);
    };
    let date: ScheduleDate = match ScheduleDate::parse(&date_str) {
        Ok(date) => date,
        Err(e) => return Err(vec![format!("date: {e}")]),
    };

    let time: ScheduleTime = get_field("time")
        .and_then(|s| ScheduleTime::parse(&s).ok())
        .unwrap_or_else(ScheduleTime::midnight);

    let content_type: ContentType = get_field("type")
        .and_then(|s| ContentType::parse(&s).ok())
        .unwrap_or(ContentType::Raid);

    let difficulty: Difficulty = get_field("difficulty")
        .and_then(|s| Difficulty::parse(&s).ok())
        .unwrap_or(Difficulty::Beginner);

    let max_members: u8 = get_field("max_members")
        .and_then(|s| s.parse::<u8>().ok())
        .filter(|n| (MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(n))
        .unwrap_or(DEFAULT_MAX_MEMBERS);

    let leader_nickname: String =
        get_field("leader").unwrap_or_else(|| String::from(DEFAULT_LEADER_NICKNAME));

    let leader_job: JobClass = get_field("leader_job")
        .and_then(|s| JobClass::parse(&s).ok())
        .unwrap_or(JobClass::Undecided);

    let members: Vec<PartyMember> = get_field("members")
        .map(|cell| parse_members_cell(&cell, max_members, now))
        .unwrap_or_default();

    Ok(Schedule {
        id: Uuid::new_v4().to_string(),
        title: get_field("title").unwrap_or_default(),
        content_type,
        content_name: get_field("content").unwrap_or_default(),
        difficulty,
        date,
        time,
        max_members,
        leader_nickname,
        leader_job,
        leader_character_id: None,
        creator_account_id: creator_account_id.to_string(),
        is_closed: false,
        note: get_field("note").unwrap_or_default(),
        members,
        created_at: now,
        updated_at: now,
    })
}

/// Parses the CSV and returns each row as a schedule or an error list.
fn parse_csv(
    csv_content: &str,
    creator_account_id: &str,
    now: OffsetDateTime,
) -> Result<Vec<(CsvRowResult, Option<Schedule>)>, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let mut results: Vec<(CsvRowResult, Option<Schedule>)> = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                results.push((
                    CsvRowResult {
                        row_number,
                        date: None,
                        title: None,
                        leader: None,
                        status: CsvRowStatus::Invalid,
                        errors: vec![format!("CSV parse error: {e}")],
                    },
                    None,
                ));
                continue;
            }
        };

        match parse_csv_row(&record, &header_map, creator_account_id, now) {
            Ok(schedule) => {
                results.push((
                    CsvRowResult {
                        row_number,
                        date: Some(schedule.date.to_string()),
                        title: Some(schedule.title.clone()),
                        leader: Some(schedule.leader_nickname.clone()),
                        status: CsvRowStatus::Valid,
                        errors: Vec::new(),
                    },
                    Some(schedule),
                ));
            }
            Err(parse_errors) => {
                let date_opt: Option<String> = header_map
                    .get("date")
                    .and_then(|&idx| record.get(idx))
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());

                let title_opt: Option<String> = header_map
                    .get("title")
                    .and_then(|&idx| record.get(idx))
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());

                let leader_opt: Option<String> = header_map
                    .get("leader")
                    .and_then(|&idx| record.get(idx))
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());

                results.push((
                    CsvRowResult {
                        row_number,
                        date: date_opt,
                        title: title_opt,
                        leader: leader_opt,
                        status: CsvRowStatus::Invalid,
                        errors: parse_errors,
                    },
                    None,
                ));
            }
        }
    }

    Ok(results)
}

/// Previews and validates CSV schedule data without persisting.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content as a string
/// * `actor` - The authenticated account performing the preview
/// * `now` - The current instant
///
/// # Returns
///
/// * `Ok(CsvPreviewResult)` with per-row validation results
/// * `Err(ApiError)` if CSV format is invalid or cannot be parsed
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the CSV carries no
/// `date` header.
pub fn preview_csv_schedules(
    csv_content: &str,
    actor: &Account,
    now: OffsetDateTime,
) -> Result<CsvPreviewResult, ApiError> {
    AuthorizationService::ensure_admin(actor, "preview_csv_schedules")?;

    let parsed = parse_csv(csv_content, &actor.id, now)?;

    let rows: Vec<CsvRowResult> = parsed.into_iter().map(|(row, _)| row).collect();
    let total_rows: usize = rows.len();
    let valid_count: usize = rows
        .iter()
        .filter(|r| r.status == CsvRowStatus::Valid)
        .count();
    let invalid_count: usize = total_rows - valid_count;

    Ok(CsvPreviewResult {
        rows,
        total_rows,
        valid_count,
        invalid_count,
    })
}

/// Imports CSV schedule data, writing every valid row.
///
/// Invalid rows are skipped and reported, they never abort the rows
/// around them.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the CSV carries no
/// `date` header, or a write fails.
pub fn import_csv_schedules(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    csv_content: &str,
    now: OffsetDateTime,
) -> Result<CsvImportResult, ApiError> {
    AuthorizationService::ensure_admin(actor, "import_csv_schedules")?;

    let parsed = parse_csv(csv_content, &actor.id, now)?;

    let mut rows: Vec<CsvRowResult> = Vec::new();
    let mut imported_count: usize = 0;

    for (row, schedule) in parsed {
        if let Some(schedule) = schedule {
            persistence
                .insert_schedule(&schedule)
                .map_err(translate_persistence_error)?;
            imported_count += 1;
        }
        rows.push(row);
    }

    let failed_count: usize = rows.len() - imported_count;

    info!(imported_count, failed_count, "CSV import finished");

    Ok(CsvImportResult {
        rows,
        imported_count,
        failed_count,
    })
}
