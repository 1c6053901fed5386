//! Handlers for the `/projects` resource.
//!
//! A project always belongs to a client. The three people fields
//! (technical project manager, sales contact, PMO) and the client are given
//! by name.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::{Date, DbId};
use talentdesk_core::validation::{validate_date_range, validate_not_blank};
use talentdesk_db::models::project::{CreateProject, ProjectResponse, UpdateProject};
use talentdesk_db::repositories::ProjectRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Project";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,
    pub client: String,
    pub technical_project_manager: Option<String>,
    pub sales_contact: Option<String>,
    pub pmo: Option<String>,
    pub sow_submitted_date: Option<Date>,
    pub sow_signed_date: Option<Date>,
    pub sow_valid_till: Option<Date>,
    pub sow_last_extended_date: Option<Date>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    pub client: Option<String>,
    pub technical_project_manager: Option<String>,
    pub sales_contact: Option<String>,
    pub pmo: Option<String>,
    pub sow_submitted_date: Option<Date>,
    pub sow_signed_date: Option<Date>,
    pub sow_valid_till: Option<Date>,
    pub sow_last_extended_date: Option<Date>,
    pub technologies: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<ProjectResponse> {
    ProjectRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

async fn ensure_name_free(state: &AppState, name: &str, current: Option<DbId>) -> AppResult<()> {
    let holder = ProjectRepo::find_by_name(&state.pool, name).await?;
    lifecycle::ensure_unique(holder.map(|p| p.id), current, ENTITY, "name", name)?;
    Ok(())
}

/// A SOW cannot be signed before it was submitted.
fn check_sow_dates(submitted: Option<Date>, signed: Option<Date>) -> AppResult<()> {
    validate_date_range("sow_submitted_date", submitted, "sow_signed_date", signed)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<ProjectResponse>>>> {
    let items = ProjectRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectResponse>>> {
    let project = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, project.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    ValidatedJson(input): ValidatedJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectResponse>>)> {
    check_sow_dates(input.sow_submitted_date, input.sow_signed_date)?;

    let name = input.name;
    ensure_name_free(&state, &name, None).await?;

    let pool = &state.pool;
    let client_id = references::client_id(pool, &input.client).await?;
    let technical_project_manager_id =
        references::optional(input.technical_project_manager.as_deref(), |n| {
            references::employee_id(pool, n)
        })
        .await?;
    let sales_contact_id = references::optional(input.sales_contact.as_deref(), |n| {
        references::employee_id(pool, n)
    })
    .await?;
    let pmo_id =
        references::optional(input.pmo.as_deref(), |n| references::employee_id(pool, n)).await?;
    let technology_ids = references::technology_ids(pool, &input.technologies).await?;

    let dto = CreateProject {
        name,
        client_id,
        technical_project_manager_id,
        sales_contact_id,
        pmo_id,
        sow_submitted_date: input.sow_submitted_date,
        sow_signed_date: input.sow_signed_date,
        sow_valid_till: input.sow_valid_till,
        sow_last_extended_date: input.sow_last_extended_date,
        technology_ids,
    };
    let project = ProjectRepo::create(pool, &dto, &user.name).await?;

    tracing::info!(project_id = project.id, name = %project.name, actor = %user.name, "Project created");
    let view = load_view(&state, project.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProjectRequest>,
) -> AppResult<Json<DataResponse<ProjectResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let pool = &state.pool;
    let existing = ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;
    check_sow_dates(
        input.sow_submitted_date.or(existing.sow_submitted_date),
        input.sow_signed_date.or(existing.sow_signed_date),
    )?;

    let name = input.name;
    if let Some(name) = &name {
        ensure_name_free(&state, name, Some(id)).await?;
    }
    let client_id =
        references::optional(input.client.as_deref(), |n| references::client_id(pool, n)).await?;
    let technical_project_manager_id =
        references::optional(input.technical_project_manager.as_deref(), |n| {
            references::employee_id(pool, n)
        })
        .await?;
    let sales_contact_id = references::optional(input.sales_contact.as_deref(), |n| {
        references::employee_id(pool, n)
    })
    .await?;
    let pmo_id =
        references::optional(input.pmo.as_deref(), |n| references::employee_id(pool, n)).await?;
    let technology_ids =
        references::optional_technology_ids(pool, input.technologies.as_deref()).await?;

    let dto = UpdateProject {
        name,
        client_id,
        technical_project_manager_id,
        sales_contact_id,
        pmo_id,
        sow_submitted_date: input.sow_submitted_date,
        sow_signed_date: input.sow_signed_date,
        sow_valid_till: input.sow_valid_till,
        sow_last_extended_date: input.sow_last_extended_date,
        technology_ids,
        is_active: input.is_active,
    };
    ProjectRepo::update(pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(project_id = id, actor = %user.name, "Project reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/projects/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ProjectRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(project_id = id, actor = %user.name, "Project deactivated");
    Ok(StatusCode::NO_CONTENT)
}
