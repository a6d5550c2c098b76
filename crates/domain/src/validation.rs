// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::schedule::{MAX_PARTY_SIZE, MIN_PARTY_SIZE, ScheduleDraft};
use crate::types::MAX_NICKNAME_LENGTH;

/// Validates the free-form and numeric fields of a schedule draft.
///
/// Typed fields (dates, times, job classes) are validated at parse time
/// and need no further checks here.
///
/// # Errors
///
/// * `DomainError::EmptyTitle` when the title is blank after trimming.
/// * `DomainError::EmptyContentName` when the content name is blank
///   after trimming.
/// * `DomainError::EmptyNickname` when the leader nickname is blank
///   after trimming.
/// * `DomainError::NicknameTooLong` when the leader nickname exceeds
///   the length limit.
/// * `DomainError::InvalidMaxMembers` when the capacity falls outside
///   the allowed party sizes.
pub fn validate_schedule_draft(draft: &ScheduleDraft) -> Result<(), DomainError> {
    if draft.title.trim().is_empty() {
        return Err(DomainError::EmptyTitle);
    }

    if draft.content_name.trim().is_empty() {
        return Err(DomainError::EmptyContentName);
    }

    validate_nickname(&draft.leader_nickname)?;

    if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&draft.max_members) {
        return Err(DomainError::InvalidMaxMembers {
            value: draft.max_members,
        });
    }

    Ok(())
}

/// Returns true when no existing nickname matches the candidate.
///
/// Matching ignores case and surrounding whitespace. This check is
/// advisory. Uniqueness is ultimately enforced by storage, and callers
/// must be prepared for a conflict even after this returns true.
#[must_use]
pub fn is_nickname_available<'a, I>(candidate: &str, existing: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let normalized = candidate.trim().to_uppercase();
    !existing
        .into_iter()
        .any(|name| name.trim().to_uppercase() == normalized)
}

/// Validates a display nickname for accounts, characters, and party
/// members.
///
/// # Errors
///
/// Returns `DomainError::EmptyNickname` when the nickname is blank
/// after trimming, or `DomainError::NicknameTooLong` when it exceeds
/// the length limit.
pub fn validate_nickname(nickname: &str) -> Result<(), DomainError> {
    let trimmed = nickname.trim();

    if trimmed.is_empty() {
        return Err(DomainError::EmptyNickname);
    }

    let length = trimmed.chars().count();
    if length > MAX_NICKNAME_LENGTH {
        return Err(DomainError::NicknameTooLong { length });
    }

    Ok(())
}
