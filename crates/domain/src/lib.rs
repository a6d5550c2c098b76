// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod event;
mod schedule;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use event::GameEvent;
pub use schedule::{
    MAX_PARTY_SIZE, MIN_PARTY_SIZE, MemberIdentity, PartyMember, RecruitmentStatus, Schedule,
    ScheduleDraft, ScheduleEdit,
};
pub use types::{
    Account, Character, ContentType, Difficulty, JobClass, LOGIN_CODE_ALPHABET, LOGIN_CODE_LENGTH,
    LoginCode, MAX_NICKNAME_LENGTH, Role, ScheduleDate, ScheduleTime,
};
pub use validation::{is_nickname_available, validate_nickname, validate_schedule_draft};
