// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of the schedule roster.
//!
//! Produces a spreadsheet-friendly snapshot with one row per schedule
//! and a fixed member column per seat. Reading the roster requires no
//! authentication, and neither does exporting it.

use party_roster_domain::{MAX_PARTY_SIZE, PartyMember, Schedule};

use crate::error::ApiError;

/// Renders schedules as CSV, one row per schedule.
///
/// Member seats beyond the occupied ones come out as empty cells, so
/// every row has the same width regardless of party size.
///
/// # Errors
///
/// Returns an error if CSV serialization fails.
pub fn export_schedules_csv(schedules: &[Schedule]) -> Result<String, ApiError> {
    let member_columns: usize = usize::from(MAX_PARTY_SIZE - 1);

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = vec![
        String::from("date"),
        String::from("time"),
        String::from("type"),
        String::from("content"),
        String::from("difficulty"),
        String::from("title"),
        String::from("leader"),
    ];
    for seat in 1..=member_columns {
        header.push(format!("member_{seat}"));
    }
    header.push(String::from("note"));

    writer.write_record(&header).map_err(csv_error)?;

    for schedule in schedules {
        let mut row: Vec<String> = vec![
            schedule.date.to_string(),
            schedule.time.to_string(),
            schedule.content_type.as_str().to_string(),
            schedule.content_name.clone(),
            schedule.difficulty.as_str().to_string(),
            schedule.title.clone(),
            schedule.leader_display(),
        ];
        for seat in 0..member_columns {
            row.push(
                schedule
                    .members
                    .get(seat)
                    .map(PartyMember::display)
                    .unwrap_or_default(),
            );
        }
        row.push(schedule.note.clone());

        writer.write_record(&row).map_err(csv_error)?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("CSV writer failed: {e}"),
    })?;

    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("CSV output was not UTF-8: {e}"),
    })
}

fn csv_error(err: csv::Error) -> ApiError {
    ApiError::Internal {
        message: format!("CSV serialization failed: {err}"),
    }
}
