// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule lifecycle and party membership operations.
//!
//! Every mutation follows the same shape: authorize, read the current
//! document and its version, apply the pure core transition, and write
//! back compare-and-swap on the version. A stale write is re-read and
//! re-applied a bounded number of times, so two interleaved mutations
//! can never both land on the same version.
//!
//! Command-based mutations return the full [`TransitionResult`] so
//! callers can broadcast the precise change to live subscribers.

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

use party_roster::{Command, TransitionResult, apply, create_schedule as build_schedule};
use party_roster_domain::{
    Account, Character, ContentType, Difficulty, JobClass, MemberIdentity, PartyMember, Schedule,
    ScheduleDate, ScheduleDraft, ScheduleEdit, ScheduleTime,
};
use party_roster_persistence::{PersistenceError, SqlitePersistence};

use crate::capabilities::AuthorizationService;
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    AddMemberRequest, CreateScheduleRequest, EditScheduleRequest, JoinPartyRequest,
    RemoveMemberRequest, UpdateMemberJobRequest, UpdateMemberNicknameRequest,
};

/// How many times a mutation re-reads and re-applies after losing the
/// version race before giving up with `ApiError::Conflict`.
const MAX_WRITE_ATTEMPTS: u32 = 3;

/// Creates a schedule from an API request.
///
/// # Errors
///
/// Returns an error if the actor is a guest, a field fails to parse, a
/// draft rule is violated, or the insert fails.
pub fn create_schedule(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    request: CreateScheduleRequest,
    now: OffsetDateTime,
) -> Result<Schedule, ApiError> {
    AuthorizationService::ensure_can_mutate(actor, "create_schedule")?;

    let draft: ScheduleDraft = ScheduleDraft {
        title: request.title,
        content_type: ContentType::parse(&request.content_type).map_err(translate_domain_error)?,
        content_name: request.content_name,
        difficulty: Difficulty::parse(&request.difficulty).map_err(translate_domain_error)?,
        date: ScheduleDate::parse(&request.date).map_err(translate_domain_error)?,
        time: ScheduleTime::parse(&request.time).map_err(translate_domain_error)?,
        max_members: request.max_members,
        leader_nickname: request.leader_nickname,
        leader_job: JobClass::parse(&request.leader_job).map_err(translate_domain_error)?,
        leader_character_id: request.leader_character_id,
        note: request.note,
    };

    let schedule: Schedule = build_schedule(
        Uuid::new_v4().to_string(),
        actor.id.clone(),
        draft,
        now,
    )
    .map_err(translate_core_error)?;

    persistence
        .insert_schedule(&schedule)
        .map_err(translate_persistence_error)?;

    info!(schedule_id = %schedule.id, title = %schedule.title, "Schedule created");

    Ok(schedule)
}

/// Edits schedule metadata.
///
/// # Errors
///
/// Returns an error if the actor may not edit the schedule, a field
/// fails to parse, or a capacity rule is violated.
pub fn edit_schedule(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
    request: EditScheduleRequest,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    let edit: ScheduleEdit = ScheduleEdit {
        title: request.title,
        content_type: request
            .content_type
            .as_deref()
            .map(ContentType::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        content_name: request.content_name,
        difficulty: request
            .difficulty
            .as_deref()
            .map(Difficulty::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        date: request
            .date
            .as_deref()
            .map(ScheduleDate::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        time: request
            .time
            .as_deref()
            .map(ScheduleTime::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        max_members: request.max_members,
        note: request.note,
    };

    run_schedule_command(
        persistence,
        schedule_id,
        Command::Edit { edit },
        now,
        |schedule| {
            AuthorizationService::ensure_can_edit_schedule(actor, schedule, "edit_schedule")
                .map_err(ApiError::from)
        },
    )
}

/// Opens or closes recruitment.
///
/// # Errors
///
/// Returns an error if the actor may not edit the schedule.
pub fn set_schedule_closed(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
    closed: bool,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    run_schedule_command(
        persistence,
        schedule_id,
        Command::SetClosed { closed },
        now,
        |schedule| {
            AuthorizationService::ensure_can_edit_schedule(actor, schedule, "set_closed")
                .map_err(ApiError::from)
        },
    )
}

/// Deletes a schedule.
///
/// # Errors
///
/// Returns an error if the schedule does not exist or the actor may not
/// edit it.
pub fn delete_schedule(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
) -> Result<(), ApiError> {
    let (schedule, _version) = persistence
        .get_schedule(schedule_id)
        .map_err(translate_persistence_error)?;

    AuthorizationService::ensure_can_edit_schedule(actor, &schedule, "delete_schedule")?;

    persistence
        .delete_schedule(schedule_id)
        .map_err(translate_persistence_error)?;

    info!(schedule_id = %schedule_id, "Schedule deleted");

    Ok(())
}

/// Deletes every schedule whose start is strictly before `now`.
///
/// Idempotent. A second call with the same `now` deletes nothing.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or the delete fails.
pub fn purge_past_schedules(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    now: OffsetDateTime,
) -> Result<usize, ApiError> {
    AuthorizationService::ensure_admin(actor, "purge_past_schedules")?;

    let deleted: usize = persistence
        .delete_past_schedules(now)
        .map_err(translate_persistence_error)?;

    info!(deleted, "Past schedules purged");

    Ok(deleted)
}

/// Joins a party with one of the actor's characters.
///
/// The seat is linked to the character, so leaving and duplicate checks
/// address it precisely.
///
/// # Errors
///
/// Returns an error if the actor is a guest, does not own the
/// character, or a membership rule rejects the join.
pub fn join_party(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
    request: JoinPartyRequest,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    AuthorizationService::ensure_can_mutate(actor, "join_party")?;

    let character: Character = persistence
        .get_character(&request.character_id)
        .map_err(translate_persistence_error)?;

    AuthorizationService::ensure_character_owner(actor, &character, "join_party")?;

    let job: JobClass = match request.job.as_deref() {
        Some(name) => JobClass::parse(name).map_err(translate_domain_error)?,
        None => character.primary_job(),
    };

    let member: PartyMember = PartyMember {
        identity: MemberIdentity::linked(&character.id),
        nickname: character.nickname,
        job,
        joined_at: now,
    };

    run_schedule_command(
        persistence,
        schedule_id,
        Command::Join { member },
        now,
        |_| Ok(()),
    )
}

/// Gives up a member seat held by one of the actor's characters.
///
/// Leaving stays possible on closed and expired schedules, so stale
/// rosters can still be cleaned up.
///
/// # Errors
///
/// Returns an error if the actor does not own the character or the
/// character holds no seat.
pub fn leave_party(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
    character_id: &str,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    AuthorizationService::ensure_can_mutate(actor, "leave_party")?;

    let character: Character = persistence
        .get_character(character_id)
        .map_err(translate_persistence_error)?;

    AuthorizationService::ensure_character_owner(actor, &character, "leave_party")?;

    run_schedule_command(
        persistence,
        schedule_id,
        Command::Leave {
            character_id: character.id,
        },
        now,
        |_| Ok(()),
    )
}

/// Adds a hand-entered member to the party.
///
/// # Errors
///
/// Returns an error if the actor may not edit the schedule or a
/// membership rule rejects the add.
pub fn add_member(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
    request: AddMemberRequest,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    let job: JobClass = JobClass::parse(&request.job).map_err(translate_domain_error)?;

    run_schedule_command(
        persistence,
        schedule_id,
        Command::AddMember {
            nickname: request.nickname,
            job,
        },
        now,
        |schedule| {
            AuthorizationService::ensure_can_edit_schedule(actor, schedule, "add_member")
                .map_err(ApiError::from)
        },
    )
}

/// Removes a member seat by identity.
///
/// Allowed on closed and expired schedules for roster cleanup.
///
/// # Errors
///
/// Returns an error if the actor may not edit the schedule or no seat
/// matches the identity.
pub fn remove_member(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
    request: RemoveMemberRequest,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    run_schedule_command(
        persistence,
        schedule_id,
        Command::RemoveMember {
            identity: request.identity,
        },
        now,
        |schedule| {
            AuthorizationService::ensure_can_edit_schedule(actor, schedule, "remove_member")
                .map_err(ApiError::from)
        },
    )
}

/// Corrects a member's job class in place.
///
/// # Errors
///
/// Returns an error if the actor may not edit the schedule or no seat
/// matches the identity.
pub fn update_member_job(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
    request: UpdateMemberJobRequest,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    let job: JobClass = JobClass::parse(&request.job).map_err(translate_domain_error)?;

    run_schedule_command(
        persistence,
        schedule_id,
        Command::UpdateMemberJob {
            identity: request.identity,
            job,
        },
        now,
        |schedule| {
            AuthorizationService::ensure_can_edit_schedule(actor, schedule, "update_member_job")
                .map_err(ApiError::from)
        },
    )
}

/// Corrects a member's nickname in place.
///
/// # Errors
///
/// Returns an error if the actor may not edit the schedule or no seat
/// matches the identity.
pub fn update_member_nickname(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
    request: UpdateMemberNicknameRequest,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    run_schedule_command(
        persistence,
        schedule_id,
        Command::UpdateMemberNickname {
            identity: request.identity,
            nickname: request.nickname,
        },
        now,
        |schedule| {
            AuthorizationService::ensure_can_edit_schedule(
                actor,
                schedule,
                "update_member_nickname",
            )
            .map_err(ApiError::from)
        },
    )
}

/// Corrects the leader's job class.
///
/// # Errors
///
/// Returns an error if the actor may not edit the schedule.
pub fn update_leader_job(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
    job: &str,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    let job: JobClass = JobClass::parse(job).map_err(translate_domain_error)?;

    run_schedule_command(
        persistence,
        schedule_id,
        Command::UpdateLeaderJob { job },
        now,
        |schedule| {
            AuthorizationService::ensure_can_edit_schedule(actor, schedule, "update_leader_job")
                .map_err(ApiError::from)
        },
    )
}

/// Corrects the leader's nickname.
///
/// # Errors
///
/// Returns an error if the actor may not edit the schedule.
pub fn update_leader_nickname(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    schedule_id: &str,
    nickname: &str,
    now: OffsetDateTime,
) -> Result<TransitionResult, ApiError> {
    run_schedule_command(
        persistence,
        schedule_id,
        Command::UpdateLeaderNickname {
            nickname: nickname.to_string(),
        },
        now,
        |schedule| {
            AuthorizationService::ensure_can_edit_schedule(
                actor,
                schedule,
                "update_leader_nickname",
            )
            .map_err(ApiError::from)
        },
    )
}

/// Read, authorize, apply, compare-and-swap write, with bounded retry.
///
/// Authorization runs against the freshly read document on every
/// attempt, so a schedule that changed hands mid-race is re-checked.
fn run_schedule_command<F>(
    persistence: &mut SqlitePersistence,
    schedule_id: &str,
    command: Command,
    now: OffsetDateTime,
    authorize: F,
) -> Result<TransitionResult, ApiError>
where
    F: Fn(&Schedule) -> Result<(), ApiError>,
{
    for attempt in 0..MAX_WRITE_ATTEMPTS {
        let (schedule, version) = persistence
            .get_schedule(schedule_id)
            .map_err(translate_persistence_error)?;

        authorize(&schedule)?;

        let result: TransitionResult =
            apply(&schedule, command.clone(), now).map_err(translate_core_error)?;

        match persistence.persist_transition(&result, version) {
            Ok(_) => return Ok(result),
            Err(PersistenceError::Conflict { .. }) => {
                debug!(schedule_id = %schedule_id, attempt, "Stale write, retrying");
            }
            Err(other) => return Err(translate_persistence_error(other)),
        }
    }

    Err(ApiError::Conflict {
        schedule_id: schedule_id.to_string(),
    })
}
