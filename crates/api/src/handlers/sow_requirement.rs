//! Handlers for the `/sow-requirements` resource: staffing lines of a SOW.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::DbId;
use talentdesk_db::models::sow_requirement::{
    CreateSowRequirement, SowRequirementResponse, UpdateSowRequirement,
};
use talentdesk_db::repositories::SowRequirementRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "SOW requirement";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSowRequirementRequest {
    /// Title of the owning SOW.
    pub sow: String,
    pub designation: Option<String>,
    #[validate(range(min = 1))]
    pub team_size: Option<i32>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSowRequirementRequest {
    pub id: Option<DbId>,
    pub sow: Option<String>,
    pub designation: Option<String>,
    #[validate(range(min = 1))]
    pub team_size: Option<i32>,
    pub technologies: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<SowRequirementResponse> {
    SowRequirementRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/sow-requirements
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<SowRequirementResponse>>>> {
    let items =
        SowRequirementRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/sow-requirements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SowRequirementResponse>>> {
    let requirement = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, requirement.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: requirement }))
}

/// POST /api/sow-requirements
pub async fn create(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    ValidatedJson(input): ValidatedJson<CreateSowRequirementRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<SowRequirementResponse>>)> {
    let pool = &state.pool;
    let sow_id = references::sow_id(pool, &input.sow).await?;
    let designation_id = references::optional(input.designation.as_deref(), |n| {
        references::designation_id(pool, n)
    })
    .await?;
    let technology_ids = references::technology_ids(pool, &input.technologies).await?;

    let dto = CreateSowRequirement {
        sow_id,
        designation_id,
        team_size: input.team_size,
        technology_ids,
    };
    let requirement = SowRequirementRepo::create(pool, &dto, &user.name).await?;

    tracing::info!(
        sow_requirement_id = requirement.id,
        sow_id,
        actor = %user.name,
        "SOW requirement created",
    );
    let view = load_view(&state, requirement.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/sow-requirements/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateSowRequirementRequest>,
) -> AppResult<Json<DataResponse<SowRequirementResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let pool = &state.pool;
    let existing = SowRequirementRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;

    let sow_id =
        references::optional(input.sow.as_deref(), |t| references::sow_id(pool, t)).await?;
    let designation_id = references::optional(input.designation.as_deref(), |n| {
        references::designation_id(pool, n)
    })
    .await?;
    let technology_ids =
        references::optional_technology_ids(pool, input.technologies.as_deref()).await?;

    let dto = UpdateSowRequirement {
        sow_id,
        designation_id,
        team_size: input.team_size,
        technology_ids,
        is_active: input.is_active,
    };
    SowRequirementRepo::update(pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(sow_requirement_id = id, actor = %user.name, "SOW requirement reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/sow-requirements/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SowRequirementRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(sow_requirement_id = id, actor = %user.name, "SOW requirement deactivated");
    Ok(StatusCode::NO_CONTENT)
}
