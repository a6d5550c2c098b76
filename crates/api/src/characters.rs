// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Character management.
//!
//! Characters belong to accounts and carry an ordered job preference
//! list. Nickname uniqueness across characters is advisory only, the
//! check is offered to callers but never enforced on write.

use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use party_roster_domain::{
    Account, Character, JobClass, is_nickname_available, validate_nickname,
};
use party_roster_persistence::SqlitePersistence;

use crate::capabilities::AuthorizationService;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{CreateCharacterRequest, UpdateCharacterRequest};

/// Creates a character owned by the actor.
///
/// # Errors
///
/// Returns an error if the actor is a guest, the nickname is invalid,
/// a job name fails to parse, or the insert fails.
pub fn create_character(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    request: CreateCharacterRequest,
    now: OffsetDateTime,
) -> Result<Character, ApiError> {
    AuthorizationService::ensure_can_mutate(actor, "create_character")?;

    validate_nickname(&request.nickname).map_err(translate_domain_error)?;
    let jobs: Vec<JobClass> = parse_jobs(&request.jobs)?;

    let character: Character = Character {
        id: Uuid::new_v4().to_string(),
        account_id: actor.id.clone(),
        nickname: request.nickname,
        jobs,
        created_at: now,
    };

    persistence
        .insert_character(&character)
        .map_err(translate_persistence_error)?;

    info!(character_id = %character.id, nickname = %character.nickname, "Character created");

    Ok(character)
}

/// Updates a character's nickname or job list.
///
/// # Errors
///
/// Returns an error if the actor does not own the character, the new
/// nickname is invalid, or a job name fails to parse.
pub fn update_character(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    character_id: &str,
    request: UpdateCharacterRequest,
) -> Result<Character, ApiError> {
    let mut character: Character = persistence
        .get_character(character_id)
        .map_err(translate_persistence_error)?;

    AuthorizationService::ensure_character_owner(actor, &character, "update_character")?;

    if let Some(nickname) = request.nickname {
        validate_nickname(&nickname).map_err(translate_domain_error)?;
        character.nickname = nickname;
    }
    if let Some(jobs) = request.jobs {
        character.jobs = parse_jobs(&jobs)?;
    }

    persistence
        .update_character(&character)
        .map_err(translate_persistence_error)?;

    Ok(character)
}

/// Deletes a character.
///
/// # Errors
///
/// Returns an error if the actor does not own the character or the
/// delete fails.
pub fn delete_character(
    persistence: &mut SqlitePersistence,
    actor: &Account,
    character_id: &str,
) -> Result<(), ApiError> {
    let character: Character = persistence
        .get_character(character_id)
        .map_err(translate_persistence_error)?;

    AuthorizationService::ensure_character_owner(actor, &character, "delete_character")?;

    persistence
        .delete_character(character_id)
        .map_err(translate_persistence_error)?;

    info!(character_id = %character_id, "Character deleted");

    Ok(())
}

/// Lists the actor's own characters.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_my_characters(
    persistence: &mut SqlitePersistence,
    actor: &Account,
) -> Result<Vec<Character>, ApiError> {
    persistence
        .list_characters_by_account(&actor.id)
        .map_err(translate_persistence_error)
}

/// Reports whether a nickname is free among registered characters.
///
/// Advisory only. A taken nickname does not block character creation.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn check_nickname_availability(
    persistence: &mut SqlitePersistence,
    candidate: &str,
) -> Result<bool, ApiError> {
    let existing: Vec<String> = persistence
        .list_character_nicknames()
        .map_err(translate_persistence_error)?;

    Ok(is_nickname_available(
        candidate,
        existing.iter().map(String::as_str),
    ))
}

fn parse_jobs(names: &[String]) -> Result<Vec<JobClass>, ApiError> {
    names
        .iter()
        .map(|name| JobClass::parse(name).map_err(translate_domain_error))
        .collect()
}
