//! Handlers for the `/departments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::DbId;
use talentdesk_core::validation::validate_letters_and_spaces;
use talentdesk_db::models::department::{CreateDepartment, Department, UpdateDepartment};
use talentdesk_db::repositories::DepartmentRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Department";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(length(min = 3, max = 50), custom(function = "validate_letters_and_spaces"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(length(min = 3, max = 50), custom(function = "validate_letters_and_spaces"))]
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find(state: &AppState, id: DbId) -> AppResult<Department> {
    DepartmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
}

async fn ensure_name_free(state: &AppState, name: &str, current: Option<DbId>) -> AppResult<()> {
    let holder = DepartmentRepo::find_by_name(&state.pool, name).await?;
    lifecycle::ensure_unique(holder.map(|d| d.id), current, ENTITY, "name", name)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/departments
///
/// Admins see inactive departments too.
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Department>>>> {
    let items =
        DepartmentRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/departments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Department>>> {
    let department = find(&state, id).await?;
    lifecycle::ensure_visible(&user.role, department.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: department }))
}

/// POST /api/departments
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateDepartmentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Department>>)> {
    let name = input.name;
    ensure_name_free(&state, &name, None).await?;

    let department =
        DepartmentRepo::create(&state.pool, &CreateDepartment { name }, &user.name).await?;

    tracing::info!(
        department_id = department.id,
        name = %department.name,
        actor = %user.name,
        "Department created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: department })))
}

/// PUT /api/departments/{id}
///
/// Partial update. Only an Admin may flip an inactive department back to
/// active.
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateDepartmentRequest>,
) -> AppResult<Json<DataResponse<Department>>> {
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

    let dto = UpdateDepartment {
        name,
        is_active: input.is_active,
    };
    let department = DepartmentRepo::update(&state.pool, id, &dto, &user.name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(department_id = id, actor = %user.name, "Department reactivated");
    }
    Ok(Json(DataResponse { data: department }))
}

/// PATCH /api/departments/{id}
///
/// Soft delete: marks the department inactive. Idempotent.
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !DepartmentRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }
    tracing::info!(department_id = id, actor = %user.name, "Department deactivated");
    Ok(StatusCode::NO_CONTENT)
}
