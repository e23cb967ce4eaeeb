use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::config::{currency_symbol, Config};
use crate::crews::CrewsRepo;
use crate::customers::{ActivityLog, Customer, CustomerFilter, CustomersRepo};
use crate::jobs::{progress, ChecklistProgress, Job, JobsRepo, NewRecurringJob};
use crate::lookup::{
    lookup_or_fallback, maps_link, DisabledLookup, GeminiLookup, LatLng, LocationLookup,
    LookupResult, MapsPlatform,
};
use crate::projection::{project, PipelineStage, SortKey, ViewParameters};
use crate::seed;

pub mod models;

use models::{
    AddNoteRequest, CreateRecurringRequest, CrewsResponse, ErrorBody, JobDetail,
    ListCustomersQuery, ListJobsQuery, ListResponse, LogActivityRequest, LookupRequest,
    MapsLinkResponse, SettingsResponse,
};

#[derive(Clone)]
pub struct ApiState {
    pub jobs: JobsRepo,
    pub customers: CustomersRepo,
    pub crews: CrewsRepo,
    pub lookup: Arc<dyn LocationLookup>,
    pub lookup_enabled: bool,
    /// Used when a lookup request carries no location of its own.
    pub home_location: Option<LatLng>,
    pub locale: String,
}

impl ApiState {
    pub fn from_config(cfg: &Config) -> Self {
        let (jobs, customers, crews) = if cfg.seed_demo_data {
            (
                JobsRepo::new(seed::jobs()),
                CustomersRepo::new(seed::customers(), seed::activity()),
                CrewsRepo::new(seed::crews()),
            )
        } else {
            (
                JobsRepo::default(),
                CustomersRepo::default(),
                CrewsRepo::default(),
            )
        };

        let lookup: Arc<dyn LocationLookup> = match &cfg.gemini_api_key {
            Some(key) => Arc::new(GeminiLookup::new(
                key,
                &cfg.gemini_model,
                &cfg.gemini_base_url,
                Duration::from_millis(cfg.lookup_timeout_ms),
            )),
            None => Arc::new(DisabledLookup),
        };

        Self {
            jobs,
            customers,
            crews,
            lookup,
            lookup_enabled: cfg.gemini_api_key.is_some(),
            home_location: cfg.home_location,
            locale: cfg.locale.clone(),
        }
    }
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        // Schedule
        .route("/jobs", get(list_jobs))
        .route("/jobs/recurring", post(create_recurring_job))
        .route("/jobs/:id", get(get_job).delete(delete_job))
        .route("/jobs/:id/maps-link", get(job_maps_link))
        .route(
            "/jobs/:id/checklist/:item_id/toggle",
            post(toggle_checklist_item),
        )
        // CRM
        .route("/customers", get(list_customers))
        .route("/customers/:id", get(get_customer))
        .route("/customers/:id/notes", post(add_customer_note))
        .route(
            "/customers/:id/activity",
            get(list_activity).post(log_activity),
        )
        // Field teams
        .route("/crews", get(list_crews))
        // Dispatch assistant
        .route("/lookup", post(lookup_location))
        .route("/settings", get(settings))
        // Health
        .route("/health", get(health))
        .with_state(state)
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody { error: msg.into() }))
}

fn not_found(what: &str) -> ApiError {
    error(StatusCode::NOT_FOUND, format!("{what} not found"))
}

const VALIDATION_CODES: [&str; 4] = [
    "CLIENT_NAME_REQUIRED",
    "NOTE_EMPTY",
    "ACTIVITY_EMPTY",
    "ACTIVITY_KIND_RESERVED",
];

fn edit_err(e: anyhow::Error) -> ApiError {
    let msg = e.to_string();
    if VALIDATION_CODES.iter().any(|code| msg.contains(code)) {
        error(StatusCode::BAD_REQUEST, msg)
    } else {
        error(StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {msg}"))
    }
}

// ----------------------------
// Schedule
// ----------------------------

pub async fn list_jobs(
    State(state): State<ApiState>,
    Query(q): Query<ListJobsQuery>,
) -> Json<ListResponse<Job>> {
    let params = ViewParameters::new(q.filter.unwrap_or_default())
        .search(q.q.unwrap_or_default())
        .sort_by(q.sort.unwrap_or(SortKey::ByTime));

    let snapshot = state.jobs.snapshot().await;
    let items = project(snapshot.as_slice(), &params).into_iter().cloned().collect();

    Json(ListResponse::new(items))
}

pub async fn create_recurring_job(
    State(state): State<ApiState>,
    Json(body): Json<CreateRecurringRequest>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let job = state
        .jobs
        .create_recurring(NewRecurringJob {
            client_name: body.client_name,
            pattern: body.pattern,
        })
        .await
        .map_err(edit_err)?;

    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn get_job(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<JobDetail>, ApiError> {
    let job = state.jobs.get_job(&id).await.ok_or_else(|| not_found("job"))?;
    let progress = progress(&job.checklist);

    Ok(Json(JobDetail { job, progress }))
}

pub async fn delete_job(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.jobs.delete_job(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found("job"))
    }
}

pub async fn toggle_checklist_item(
    State(state): State<ApiState>,
    Path((id, item_id)): Path<(String, u32)>,
) -> Result<Json<ChecklistProgress>, ApiError> {
    state
        .jobs
        .toggle_checklist_item(&id, item_id)
        .await
        .map(Json)
        .ok_or_else(|| not_found("checklist item"))
}

pub async fn job_maps_link(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<MapsLinkResponse>, ApiError> {
    let job = state.jobs.get_job(&id).await.ok_or_else(|| not_found("job"))?;

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let platform = MapsPlatform::from_user_agent(user_agent);

    let url = maps_link(&job.address, platform)
        .map_err(|e| error(StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}")))?;

    Ok(Json(MapsLinkResponse { url, platform }))
}

// ----------------------------
// CRM
// ----------------------------

pub async fn list_customers(
    State(state): State<ApiState>,
    Query(q): Query<ListCustomersQuery>,
) -> Json<ListResponse<Customer>> {
    let params = ViewParameters::new(q.filter.unwrap_or(CustomerFilter::All))
        .search(q.q.unwrap_or_default())
        .sort_by(q.sort.unwrap_or(SortKey::Input))
        .pipeline(q.pipeline.unwrap_or(PipelineStage::Clients));

    let snapshot = state.customers.snapshot().await;
    let items = project(snapshot.as_slice(), &params).into_iter().cloned().collect();

    Json(ListResponse::new(items))
}

pub async fn get_customer(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    state
        .customers
        .get_customer(&id)
        .await
        .map(Json)
        .ok_or_else(|| not_found("customer"))
}

pub async fn add_customer_note(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<AddNoteRequest>,
) -> Result<Json<Customer>, ApiError> {
    state
        .customers
        .add_note(&id, &body.note)
        .await
        .map_err(edit_err)?
        .map(Json)
        .ok_or_else(|| not_found("customer"))
}

pub async fn list_activity(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ActivityLog>>, ApiError> {
    if state.customers.get_customer(&id).await.is_none() {
        return Err(not_found("customer"));
    }
    Ok(Json(state.customers.activity_for(&id).await))
}

pub async fn log_activity(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<LogActivityRequest>,
) -> Result<(StatusCode, Json<ActivityLog>), ApiError> {
    let author = body.author.unwrap_or_else(|| "Office".to_string());

    let entry = state
        .customers
        .log_activity(&id, body.kind, &body.content, &author)
        .await
        .map_err(edit_err)?
        .ok_or_else(|| not_found("customer"))?;

    Ok((StatusCode::CREATED, Json(entry)))
}

// ----------------------------
// Crews, lookup, settings
// ----------------------------

pub async fn list_crews(State(state): State<ApiState>) -> Json<CrewsResponse> {
    let crews = state.crews.snapshot().await;
    let summary = state.crews.status_summary().await;

    Json(CrewsResponse {
        crews: crews.to_vec(),
        summary,
    })
}

pub async fn lookup_location(
    State(state): State<ApiState>,
    Json(body): Json<LookupRequest>,
) -> Result<Json<LookupResult>, ApiError> {
    let query = body.query.trim();
    if query.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "query is required"));
    }

    let near = body.location.or(state.home_location);
    info!(query_len = query.len(), has_location = near.is_some(), "location lookup");

    Ok(Json(
        lookup_or_fallback(state.lookup.as_ref(), query, near).await,
    ))
}

pub async fn settings(State(state): State<ApiState>) -> Json<SettingsResponse> {
    Json(SettingsResponse {
        currency_symbol: currency_symbol(&state.locale),
        locale: state.locale,
        lookup_enabled: state.lookup_enabled,
    })
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
