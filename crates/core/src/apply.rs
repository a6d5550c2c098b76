// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{ScheduleChange, TransitionResult};
use party_roster_domain::{
    DomainError, MAX_PARTY_SIZE, MIN_PARTY_SIZE, MemberIdentity, PartyMember, Schedule,
    ScheduleDraft, validate_nickname, validate_schedule_draft,
};

/// Builds a new schedule from a validated draft.
///
/// The schedule starts open with an empty member list. Free-form fields
/// are stored trimmed.
///
/// # Arguments
///
/// * `id` - The identifier assigned by the caller
/// * `creator_account_id` - The account creating the schedule
/// * `draft` - The fields supplied by the creator
/// * `now` - The current instant, used for both timestamps
///
/// # Errors
///
/// Returns an error if the draft violates domain rules.
pub fn create_schedule(
    id: String,
    creator_account_id: String,
    draft: ScheduleDraft,
    now: OffsetDateTime,
) -> Result<Schedule, CoreError> {
    validate_schedule_draft(&draft)?;

    Ok(Schedule {
        id,
        title: draft.title.trim().to_string(),
        content_type: draft.content_type,
        content_name: draft.content_name.trim().to_string(),
        difficulty: draft.difficulty,
        date: draft.date,
        time: draft.time,
        max_members: draft.max_members,
        leader_nickname: draft.leader_nickname.trim().to_string(),
        leader_job: draft.leader_job,
        leader_character_id: draft.leader_character_id,
        creator_account_id,
        is_closed: false,
        note: draft.note.trim().to_string(),
        members: Vec::new(),
        created_at: now,
        updated_at: now,
    })
}

/// Applies a command to a schedule, producing the new schedule and a
/// change summary.
///
/// The input schedule is never modified. Membership rules are checked
/// in a fixed order so every caller observes the same rejection for the
/// same roster.
///
/// # Arguments
///
/// * `schedule` - The current schedule (immutable)
/// * `command` - The command to apply
/// * `now` - The current instant, used for expiry checks and timestamps
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new schedule and change
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if the command violates domain rules.
#[allow(clippy::too_many_lines)]
pub fn apply(
    schedule: &Schedule,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let mut new_schedule: Schedule = schedule.clone();

    let change: ScheduleChange = match command {
        Command::Join { member } => {
            // Rejections are checked closed, expired, already joined,
            // already leader, then full.
            if schedule.is_closed {
                return Err(CoreError::DomainViolation(DomainError::PartyClosed {
                    schedule_id: schedule.id.clone(),
                }));
            }

            if schedule.is_expired(now) {
                return Err(CoreError::DomainViolation(DomainError::PartyExpired {
                    schedule_id: schedule.id.clone(),
                }));
            }

            if schedule.contains_member(&member.identity) {
                return Err(CoreError::DomainViolation(DomainError::AlreadyJoined {
                    schedule_id: schedule.id.clone(),
                }));
            }

            if let Some(character_id) = member.identity.character_id()
                && schedule.is_led_by(character_id)
            {
                return Err(CoreError::DomainViolation(DomainError::AlreadyLeader {
                    schedule_id: schedule.id.clone(),
                }));
            }

            if schedule.is_full() {
                return Err(CoreError::DomainViolation(DomainError::PartyFull {
                    schedule_id: schedule.id.clone(),
                    max_members: schedule.max_members,
                }));
            }

            let nickname: String = member.nickname.clone();
            new_schedule.members.push(member);
            ScheduleChange::MemberJoined { nickname }
        }
        Command::Leave { character_id } => {
            let position: Option<usize> = schedule
                .members
                .iter()
                .position(|m| m.identity.character_id() == Some(character_id.as_str()));

            let Some(position) = position else {
                return Err(CoreError::DomainViolation(DomainError::NotParticipant {
                    schedule_id: schedule.id.clone(),
                }));
            };

            let removed: PartyMember = new_schedule.members.remove(position);
            ScheduleChange::MemberLeft {
                nickname: removed.nickname,
            }
        }
        Command::AddMember { nickname, job } => {
            validate_nickname(&nickname)?;

            if schedule.is_expired(now) {
                return Err(CoreError::DomainViolation(DomainError::PartyExpired {
                    schedule_id: schedule.id.clone(),
                }));
            }

            if schedule.is_full() {
                return Err(CoreError::DomainViolation(DomainError::PartyFull {
                    schedule_id: schedule.id.clone(),
                    max_members: schedule.max_members,
                }));
            }

            let trimmed: String = nickname.trim().to_string();
            new_schedule.members.push(PartyMember {
                identity: MemberIdentity::ad_hoc(),
                nickname: trimmed.clone(),
                job,
                joined_at: now,
            });
            ScheduleChange::MemberAdded { nickname: trimmed }
        }
        Command::RemoveMember { identity } => {
            let position: Option<usize> =
                schedule.members.iter().position(|m| m.matches(&identity));

            let Some(position) = position else {
                return Err(CoreError::DomainViolation(DomainError::MemberNotFound {
                    schedule_id: schedule.id.clone(),
                }));
            };

            let removed: PartyMember = new_schedule.members.remove(position);
            ScheduleChange::MemberRemoved {
                nickname: removed.nickname,
            }
        }
        Command::UpdateMemberJob { identity, job } => {
            let member: &mut PartyMember = find_member_mut(&mut new_schedule, &identity)
                .ok_or_else(|| {
                    CoreError::DomainViolation(DomainError::MemberNotFound {
                        schedule_id: schedule.id.clone(),
                    })
                })?;

            member.job = job;
            ScheduleChange::MemberCorrected {
                nickname: member.nickname.clone(),
            }
        }
        Command::UpdateMemberNickname { identity, nickname } => {
            validate_nickname(&nickname)?;

            let member: &mut PartyMember = find_member_mut(&mut new_schedule, &identity)
                .ok_or_else(|| {
                    CoreError::DomainViolation(DomainError::MemberNotFound {
                        schedule_id: schedule.id.clone(),
                    })
                })?;

            member.nickname = nickname.trim().to_string();
            ScheduleChange::MemberCorrected {
                nickname: member.nickname.clone(),
            }
        }
        Command::UpdateLeaderJob { job } => {
            new_schedule.leader_job = job;
            ScheduleChange::LeaderCorrected
        }
        Command::UpdateLeaderNickname { nickname } => {
            validate_nickname(&nickname)?;
            new_schedule.leader_nickname = nickname.trim().to_string();
            ScheduleChange::LeaderCorrected
        }
        Command::SetClosed { closed } => {
            new_schedule.is_closed = closed;
            ScheduleChange::ClosedChanged { closed }
        }
        Command::Edit { edit } => {
            if let Some(title) = edit.title {
                if title.trim().is_empty() {
                    return Err(CoreError::DomainViolation(DomainError::EmptyTitle));
                }
                new_schedule.title = title.trim().to_string();
            }

            if let Some(content_name) = edit.content_name {
                if content_name.trim().is_empty() {
                    return Err(CoreError::DomainViolation(DomainError::EmptyContentName));
                }
                new_schedule.content_name = content_name.trim().to_string();
            }

            if let Some(content_type) = edit.content_type {
                new_schedule.content_type = content_type;
            }

            if let Some(difficulty) = edit.difficulty {
                new_schedule.difficulty = difficulty;
            }

            if let Some(date) = edit.date {
                new_schedule.date = date;
            }

            if let Some(time) = edit.time {
                new_schedule.time = time;
            }

            if let Some(max_members) = edit.max_members {
                if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&max_members) {
                    return Err(CoreError::DomainViolation(DomainError::InvalidMaxMembers {
                        value: max_members,
                    }));
                }

                // Shrinking below the occupied seats would strand members.
                let occupied: u8 = schedule.occupied_seats();
                if max_members < occupied {
                    return Err(CoreError::DomainViolation(
                        DomainError::MaxMembersBelowPartySize {
                            requested: max_members,
                            occupied,
                        },
                    ));
                }

                new_schedule.max_members = max_members;
            }

            if let Some(note) = edit.note {
                new_schedule.note = note.trim().to_string();
            }

            ScheduleChange::Edited
        }
    };

    new_schedule.updated_at = now;

    Ok(TransitionResult {
        new_schedule,
        change,
    })
}

fn find_member_mut<'a>(
    schedule: &'a mut Schedule,
    identity: &MemberIdentity,
) -> Option<&'a mut PartyMember> {
    schedule.members.iter_mut().find(|m| m.matches(identity))
}
