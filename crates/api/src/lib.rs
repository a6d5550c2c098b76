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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

//! Operation boundary for the Party Roster.
//!
//! Every call site, whether an HTTP handler or a test, goes through the
//! functions in this crate. Each operation authenticates or authorizes
//! the actor, parses boundary strings into domain types, runs the pure
//! core transition, and persists the outcome. Nothing here holds state,
//! the persistence handle is passed in.

pub mod accounts;
pub mod auth;
pub mod capabilities;
pub mod characters;
pub mod csv_import;
pub mod error;
pub mod events;
pub mod export;
pub mod queries;
pub mod request_response;
pub mod schedules;

#[cfg(test)]
mod tests;

pub use auth::AuthenticationService;
pub use capabilities::AuthorizationService;
pub use csv_import::{
    CsvImportResult, CsvPreviewResult, CsvRowResult, CsvRowStatus, import_csv_schedules,
    preview_csv_schedules,
};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use export::export_schedules_csv;
pub use request_response::{
    AddMemberRequest, CreateCharacterRequest, CreateEventRequest, CreateScheduleRequest,
    EditScheduleRequest, JoinPartyRequest, LoginRequest, LoginResponse, PurgeResponse,
    RegisterAccountRequest, RegisterAccountResponse, RemoveMemberRequest,
    UpdateCharacterRequest, UpdateMemberJobRequest, UpdateMemberNicknameRequest,
};
