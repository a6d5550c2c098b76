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

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info};

use party_roster::TransitionResult;
use party_roster_api::{
    AddMemberRequest, ApiError, AuthenticationService, CreateCharacterRequest,
    CreateEventRequest, CreateScheduleRequest, CsvImportResult, CsvPreviewResult,
    EditScheduleRequest, JoinPartyRequest, LoginRequest, LoginResponse, PurgeResponse,
    RegisterAccountRequest, RegisterAccountResponse, RemoveMemberRequest,
    UpdateCharacterRequest, UpdateMemberJobRequest, UpdateMemberNicknameRequest, accounts,
    characters, csv_import, events, export, queries, schedules,
};
use party_roster_domain::{Account, Character, ContentType, GameEvent, LoginCode, Schedule};
use party_roster_persistence::SqlitePersistence;

mod live;
mod session;

use live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use session::SessionAccount;

/// Party Roster Server - HTTP server for the party schedule roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Reserved login code that creates the first admin account on login
    #[arg(short, long)]
    bootstrap_code: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer wrapped for safe concurrent access.
    persistence: Arc<Mutex<SqlitePersistence>>,
    /// The reserved admin bootstrap code.
    bootstrap_code: LoginCode,
    /// Broadcaster for live roster events.
    broadcaster: Arc<LiveEventBroadcaster>,
}

impl axum::extract::FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.broadcaster)
    }
}

/// Query parameters for listing schedules.
#[derive(Debug, Deserialize)]
struct ListSchedulesQuery {
    /// Restrict to one content category.
    content_type: Option<String>,
    /// Restrict to schedules this character leads or sits in.
    character_id: Option<String>,
    /// Restrict to schedules mentioning this nickname.
    nickname: Option<String>,
}

/// Query parameters for the nickname availability check.
#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    /// The candidate nickname.
    nickname: String,
}

/// API request to open or close recruitment.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
struct SetClosedRequest {
    /// True to stop recruiting.
    closed: bool,
}

/// API request to give up a member seat.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct LeaveRequest {
    /// The character holding the seat.
    character_id: String,
}

/// API request to correct the leader's job class.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct LeaderJobRequest {
    /// The new job class display name.
    job: String,
}

/// API request to correct the leader's nickname.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct LeaderNicknameRequest {
    /// The new nickname.
    nickname: String,
}

/// API request carrying raw CSV content.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CsvUploadRequest {
    /// The CSV file content.
    csv: String,
}

/// API response for the nickname availability check.
#[derive(Debug, Clone, Copy, Serialize)]
struct AvailabilityResponse {
    /// True when no registered character uses the nickname.
    available: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } | ApiError::InvalidCsvFormat { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST /login endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let (session_token, account) = AuthenticationService::login_with_code(
        &mut persistence,
        &req.code,
        &app_state.bootstrap_code,
        OffsetDateTime::now_utc(),
    )
    .map_err(ApiError::from)?;
    drop(persistence);

    Ok(Json(LoginResponse {
        session_token,
        account_id: account.id,
        nickname: account.nickname,
        role: account.role.as_str().to_string(),
    }))
}

/// Handler for POST /logout endpoint.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: axum::http::HeaderMap,
) -> Result<StatusCode, HttpError> {
    let token: String = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(ToString::to_string)
        .ok_or_else(|| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Missing Authorization header"),
        })?;

    let mut persistence = app_state.persistence.lock().await;
    AuthenticationService::logout(&mut persistence, &token).map_err(ApiError::from)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /schedules endpoint.
///
/// Lists schedules, optionally filtered by content type, character, or
/// nickname.
async fn handle_list_schedules(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListSchedulesQuery>,
) -> Result<Json<Vec<Schedule>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;

    let listed: Vec<Schedule> = if let Some(character_id) = query.character_id {
        queries::my_schedules(&mut persistence, &character_id)?
    } else if let Some(nickname) = query.nickname {
        queries::search_by_nickname(&mut persistence, &nickname)?
    } else if let Some(type_str) = query.content_type {
        let content_type: ContentType = ContentType::parse(&type_str)
            .map_err(party_roster_api::translate_domain_error)?;
        queries::schedules_by_type(&mut persistence, content_type)?
    } else {
        queries::list_schedules(&mut persistence)?
    };
    drop(persistence);

    Ok(Json(listed))
}

/// Handler for GET `/schedules/{id}` endpoint.
async fn handle_get_schedule(
    AxumState(app_state): AxumState<AppState>,
    Path(schedule_id): Path<String>,
) -> Result<Json<Schedule>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let schedule: Schedule = queries::get_schedule(&mut persistence, &schedule_id)?;
    drop(persistence);

    Ok(Json(schedule))
}

/// Handler for GET /schedules/export endpoint.
///
/// Returns the full roster as a CSV attachment.
async fn handle_export_schedules(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let listed: Vec<Schedule> = queries::list_schedules(&mut persistence)?;
    drop(persistence);

    let csv: String = export::export_schedules_csv(&listed)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"schedules.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// Handler for POST /schedules endpoint.
async fn handle_create_schedule(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Json(req): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<Schedule>), HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let schedule: Schedule = schedules::create_schedule(
        &mut persistence,
        &account,
        req,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    app_state.broadcaster.broadcast(&LiveEvent::ScheduleCreated {
        schedule_id: schedule.id.clone(),
    });

    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Handler for POST `/schedules/{id}/edit` endpoint.
async fn handle_edit_schedule(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
    Json(req): Json<EditScheduleRequest>,
) -> Result<Json<Schedule>, HttpError> {
    run_mutation(&app_state, |persistence, now| {
        schedules::edit_schedule(persistence, &account, &schedule_id, req, now)
    })
    .await
}

/// Handler for POST `/schedules/{id}/closed` endpoint.
async fn handle_set_closed(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
    Json(req): Json<SetClosedRequest>,
) -> Result<Json<Schedule>, HttpError> {
    run_mutation(&app_state, |persistence, now| {
        schedules::set_schedule_closed(persistence, &account, &schedule_id, req.closed, now)
    })
    .await
}

/// Handler for DELETE `/schedules/{id}` endpoint.
async fn handle_delete_schedule(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    schedules::delete_schedule(&mut persistence, &account, &schedule_id)?;
    drop(persistence);

    app_state.broadcaster.broadcast(&LiveEvent::ScheduleDeleted {
        schedule_id,
    });

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /schedules/purge endpoint.
///
/// Deletes every schedule whose start has passed.
async fn handle_purge_schedules(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
) -> Result<Json<PurgeResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let deleted: usize = schedules::purge_past_schedules(
        &mut persistence,
        &account,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(PurgeResponse { deleted }))
}

/// Handler for POST `/schedules/{id}/join` endpoint.
async fn handle_join_party(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
    Json(req): Json<JoinPartyRequest>,
) -> Result<Json<Schedule>, HttpError> {
    run_mutation(&app_state, |persistence, now| {
        schedules::join_party(persistence, &account, &schedule_id, req, now)
    })
    .await
}

/// Handler for POST `/schedules/{id}/leave` endpoint.
async fn handle_leave_party(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
    Json(req): Json<LeaveRequest>,
) -> Result<Json<Schedule>, HttpError> {
    run_mutation(&app_state, |persistence, now| {
        schedules::leave_party(persistence, &account, &schedule_id, &req.character_id, now)
    })
    .await
}

/// Handler for POST `/schedules/{id}/members` endpoint.
async fn handle_add_member(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
    Json(req): Json<AddMemberRequest>,
) -> Result<Json<Schedule>, HttpError> {
    run_mutation(&app_state, |persistence, now| {
        schedules::add_member(persistence, &account, &schedule_id, req, now)
    })
    .await
}

/// Handler for POST `/schedules/{id}/members/remove` endpoint.
async fn handle_remove_member(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
    Json(req): Json<RemoveMemberRequest>,
) -> Result<Json<Schedule>, HttpError> {
    run_mutation(&app_state, |persistence, now| {
        schedules::remove_member(persistence, &account, &schedule_id, req, now)
    })
    .await
}

/// Handler for POST `/schedules/{id}/members/job` endpoint.
async fn handle_update_member_job(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
    Json(req): Json<UpdateMemberJobRequest>,
) -> Result<Json<Schedule>, HttpError> {
    run_mutation(&app_state, |persistence, now| {
        schedules::update_member_job(persistence, &account, &schedule_id, req, now)
    })
    .await
}

/// Handler for POST `/schedules/{id}/members/nickname` endpoint.
async fn handle_update_member_nickname(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
    Json(req): Json<UpdateMemberNicknameRequest>,
) -> Result<Json<Schedule>, HttpError> {
    run_mutation(&app_state, |persistence, now| {
        schedules::update_member_nickname(persistence, &account, &schedule_id, req, now)
    })
    .await
}

/// Handler for POST `/schedules/{id}/leader/job` endpoint.
async fn handle_update_leader_job(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
    Json(req): Json<LeaderJobRequest>,
) -> Result<Json<Schedule>, HttpError> {
    run_mutation(&app_state, |persistence, now| {
        schedules::update_leader_job(persistence, &account, &schedule_id, &req.job, now)
    })
    .await
}

/// Handler for POST `/schedules/{id}/leader/nickname` endpoint.
async fn handle_update_leader_nickname(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(schedule_id): Path<String>,
    Json(req): Json<LeaderNicknameRequest>,
) -> Result<Json<Schedule>, HttpError> {
    run_mutation(&app_state, |persistence, now| {
        schedules::update_leader_nickname(
            persistence,
            &account,
            &schedule_id,
            &req.nickname,
            now,
        )
    })
    .await
}

/// Handler for POST /schedules/import/preview endpoint.
#[allow(clippy::unused_async)]
async fn handle_preview_csv(
    SessionAccount(account): SessionAccount,
    Json(req): Json<CsvUploadRequest>,
) -> Result<Json<CsvPreviewResult>, HttpError> {
    let preview: CsvPreviewResult =
        csv_import::preview_csv_schedules(&req.csv, &account, OffsetDateTime::now_utc())?;

    Ok(Json(preview))
}

/// Handler for POST /schedules/import endpoint.
async fn handle_import_csv(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Json(req): Json<CsvUploadRequest>,
) -> Result<Json<CsvImportResult>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let result: CsvImportResult = csv_import::import_csv_schedules(
        &mut persistence,
        &account,
        &req.csv,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(result))
}

/// Handler for POST /accounts endpoint.
async fn handle_register_account(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Json(req): Json<RegisterAccountRequest>,
) -> Result<(StatusCode, Json<RegisterAccountResponse>), HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterAccountResponse = accounts::register_account(
        &mut persistence,
        &account,
        req,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for GET /accounts endpoint.
async fn handle_list_accounts(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
) -> Result<Json<Vec<Account>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let listed: Vec<Account> = accounts::list_accounts(&mut persistence, &account)?;
    drop(persistence);

    Ok(Json(listed))
}

/// Handler for DELETE `/accounts/{id}` endpoint.
async fn handle_delete_account(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(account_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    accounts::delete_account(&mut persistence, &account, &account_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /characters endpoint.
async fn handle_create_character(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Json(req): Json<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<Character>), HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let character: Character = characters::create_character(
        &mut persistence,
        &account,
        req,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(character)))
}

/// Handler for GET /characters endpoint.
///
/// Lists the authenticated account's own characters.
async fn handle_list_characters(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
) -> Result<Json<Vec<Character>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let listed: Vec<Character> = characters::list_my_characters(&mut persistence, &account)?;
    drop(persistence);

    Ok(Json(listed))
}

/// Handler for POST `/characters/{id}/edit` endpoint.
async fn handle_update_character(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(character_id): Path<String>,
    Json(req): Json<UpdateCharacterRequest>,
) -> Result<Json<Character>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let character: Character =
        characters::update_character(&mut persistence, &account, &character_id, req)?;
    drop(persistence);

    Ok(Json(character))
}

/// Handler for DELETE `/characters/{id}` endpoint.
async fn handle_delete_character(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(character_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    characters::delete_character(&mut persistence, &account, &character_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /characters/availability endpoint.
async fn handle_nickname_availability(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let available: bool =
        characters::check_nickname_availability(&mut persistence, &query.nickname)?;
    drop(persistence);

    Ok(Json(AvailabilityResponse { available }))
}

/// Handler for GET /events endpoint.
///
/// Lists events still inside their visibility window.
async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<GameEvent>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let visible: Vec<GameEvent> =
        events::list_visible_events(&mut persistence, OffsetDateTime::now_utc())?;
    drop(persistence);

    Ok(Json(visible))
}

/// Handler for POST /events endpoint.
async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<GameEvent>), HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let event: GameEvent =
        events::create_event(&mut persistence, &account, req, OffsetDateTime::now_utc())?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(event)))
}

/// Handler for DELETE `/events/{id}` endpoint.
async fn handle_delete_event(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
    Path(event_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    events::delete_event(&mut persistence, &account, &event_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /events/purge endpoint.
async fn handle_purge_events(
    AxumState(app_state): AxumState<AppState>,
    SessionAccount(account): SessionAccount,
) -> Result<Json<PurgeResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let deleted: usize = events::purge_expired_events(
        &mut persistence,
        &account,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(PurgeResponse { deleted }))
}

/// Runs a schedule mutation and broadcasts the resulting change.
///
/// The broadcast carries the precise change the transition produced,
/// so subscribers can tell a join from a kick or a close. The HTTP
/// response carries the full schedule.
async fn run_mutation<F>(app_state: &AppState, operation: F) -> Result<Json<Schedule>, HttpError>
where
    F: FnOnce(&mut SqlitePersistence, OffsetDateTime) -> Result<TransitionResult, ApiError>,
{
    let mut persistence = app_state.persistence.lock().await;
    let result: TransitionResult = operation(&mut persistence, OffsetDateTime::now_utc())?;
    drop(persistence);

    app_state.broadcaster.broadcast(&LiveEvent::ScheduleChanged {
        schedule_id: result.new_schedule.id.clone(),
        change: result.change,
    });

    Ok(Json(result.new_schedule))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/schedules", get(handle_list_schedules))
        .route("/schedules", post(handle_create_schedule))
        .route("/schedules/export", get(handle_export_schedules))
        .route("/schedules/purge", post(handle_purge_schedules))
        .route("/schedules/import", post(handle_import_csv))
        .route("/schedules/import/preview", post(handle_preview_csv))
        .route("/schedules/{id}", get(handle_get_schedule))
        .route("/schedules/{id}", delete(handle_delete_schedule))
        .route("/schedules/{id}/edit", post(handle_edit_schedule))
        .route("/schedules/{id}/closed", post(handle_set_closed))
        .route("/schedules/{id}/join", post(handle_join_party))
        .route("/schedules/{id}/leave", post(handle_leave_party))
        .route("/schedules/{id}/members", post(handle_add_member))
        .route("/schedules/{id}/members/remove", post(handle_remove_member))
        .route("/schedules/{id}/members/job", post(handle_update_member_job))
        .route(
            "/schedules/{id}/members/nickname",
            post(handle_update_member_nickname),
        )
        .route("/schedules/{id}/leader/job", post(handle_update_leader_job))
        .route(
            "/schedules/{id}/leader/nickname",
            post(handle_update_leader_nickname),
        )
        .route("/accounts", post(handle_register_account))
        .route("/accounts", get(handle_list_accounts))
        .route("/accounts/{id}", delete(handle_delete_account))
        .route("/characters", post(handle_create_character))
        .route("/characters", get(handle_list_characters))
        .route(
            "/characters/availability",
            get(handle_nickname_availability),
        )
        .route("/characters/{id}/edit", post(handle_update_character))
        .route("/characters/{id}", delete(handle_delete_character))
        .route("/events", get(handle_list_events))
        .route("/events", post(handle_create_event))
        .route("/events/purge", post(handle_purge_events))
        .route("/events/{id}", delete(handle_delete_event))
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Party Roster Server");

    let bootstrap_code: LoginCode = LoginCode::parse(&args.bootstrap_code)
        .map_err(|e| format!("Invalid bootstrap code: {e}"))?;

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        bootstrap_code,
        broadcaster: Arc::new(LiveEventBroadcaster::new()),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
