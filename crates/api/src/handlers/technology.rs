//! Handlers for the `/technologies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::DbId;
use talentdesk_core::validation::validate_not_blank;
use talentdesk_db::models::technology::{CreateTechnology, TechnologyResponse, UpdateTechnology};
use talentdesk_db::repositories::TechnologyRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Technology";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTechnologyRequest {
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,
    /// Owning department, by name.
    pub department: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTechnologyRequest {
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    pub department: Option<String>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<TechnologyResponse> {
    TechnologyRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

async fn ensure_name_free(state: &AppState, name: &str, current: Option<DbId>) -> AppResult<()> {
    let holder = TechnologyRepo::find_by_name(&state.pool, name).await?;
    lifecycle::ensure_unique(holder.map(|t| t.id), current, ENTITY, "name", name)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/technologies
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<TechnologyResponse>>>> {
    let items =
        TechnologyRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/technologies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TechnologyResponse>>> {
    let technology = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, technology.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: technology }))
}

/// POST /api/technologies
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateTechnologyRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<TechnologyResponse>>)> {
    let name = input.name;
    ensure_name_free(&state, &name, None).await?;
    let department_id = references::optional(input.department.as_deref(), |n| {
        references::department_id(&state.pool, n)
    })
    .await?;

    let technology = TechnologyRepo::create(
        &state.pool,
        &CreateTechnology {
            name,
            department_id,
        },
        &user.name,
    )
    .await?;

    tracing::info!(
        technology_id = technology.id,
        name = %technology.name,
        actor = %user.name,
        "Technology created"
    );
    let view = load_view(&state, technology.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/technologies/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTechnologyRequest>,
) -> AppResult<Json<DataResponse<TechnologyResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let existing = TechnologyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;

    let name = input.name;
    if let Some(name) = &name {
        ensure_name_free(&state, name, Some(id)).await?;
    }
    let department_id = references::optional(input.department.as_deref(), |n| {
        references::department_id(&state.pool, n)
    })
    .await?;

    let dto = UpdateTechnology {
        name,
        department_id,
        is_active: input.is_active,
    };
    TechnologyRepo::update(&state.pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(technology_id = id, actor = %user.name, "Technology reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/technologies/{id}
///
/// Soft delete. Links from employees, projects and enquiries are kept.
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TechnologyRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(technology_id = id, actor = %user.name, "Technology deactivated");
    Ok(StatusCode::NO_CONTENT)
}
