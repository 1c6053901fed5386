//! Handlers for the `/designations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::DbId;
use talentdesk_core::validation::validate_letters_and_spaces;
use talentdesk_db::models::designation::{CreateDesignation, Designation, UpdateDesignation};
use talentdesk_db::repositories::DesignationRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Designation";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDesignationRequest {
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(length(min = 3, max = 50), custom(function = "validate_letters_and_spaces"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDesignationRequest {
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(length(min = 3, max = 50), custom(function = "validate_letters_and_spaces"))]
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find(state: &AppState, id: DbId) -> AppResult<Designation> {
    DesignationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}

async fn ensure_name_free(state: &AppState, name: &str, current: Option<DbId>) -> AppResult<()> {
    let holder = DesignationRepo::find_by_name(&state.pool, name).await?;
    lifecycle::ensure_unique(holder.map(|d| d.id), current, ENTITY, "name", name)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/designations
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Designation>>>> {
    let items =
        DesignationRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/designations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Designation>>> {
    let designation = find(&state, id).await?;
    lifecycle::ensure_visible(&user.role, designation.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: designation }))
}

/// POST /api/designations
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateDesignationRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Designation>>)> {
    let name = input.name;
    ensure_name_free(&state, &name, None).await?;

    let designation =
        DesignationRepo::create(&state.pool, &CreateDesignation { name }, &user.name).await?;

    tracing::info!(
        designation_id = designation.id,
        name = %designation.name,
        actor = %user.name,
        "Designation created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: designation })))
}

/// PUT /api/designations/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDesignationRequest>,
) -> AppResult<Json<DataResponse<Designation>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let existing = find(&state, id).await?;
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

    let dto = UpdateDesignation {
        name,
        is_active: input.is_active,
    };
    let designation = DesignationRepo::update(&state.pool, id, &dto, &user.name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(designation_id = id, actor = %user.name, "Designation reactivated");
    }
    Ok(Json(DataResponse { data: designation }))
}

/// PATCH /api/designations/{id} (soft delete)
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !DesignationRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }
    tracing::info!(designation_id = id, actor = %user.name, "Designation deactivated");
    Ok(StatusCode::NO_CONTENT)
}
