//! Handlers for the `/training-teams` resource: employees enrolled in a training.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::DbId;
use talentdesk_db::models::training_team::{
    CreateTrainingTeam, TrainingTeamResponse, UpdateTrainingTeam,
};
use talentdesk_db::repositories::TrainingTeamRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireLead, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Training team member";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTrainingTeamRequest {
    pub training_id: DbId,
    /// Display name of the enrolled employee.
    pub employee: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTrainingTeamRequest {
    pub id: Option<DbId>,
    pub training_id: Option<DbId>,
    pub employee: Option<String>,
    pub is_active: Option<bool>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<TrainingTeamResponse> {
    TrainingTeamRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/training-teams
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<TrainingTeamResponse>>>> {
    let items =
        TrainingTeamRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/training-teams/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TrainingTeamResponse>>> {
    let member = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, member.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: member }))
}

/// POST /api/training-teams
pub async fn create(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    ValidatedJson(input): ValidatedJson<CreateTrainingTeamRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<TrainingTeamResponse>>)> {
    let pool = &state.pool;
    let dto = CreateTrainingTeam {
        training_id: references::training_id(pool, input.training_id).await?,
        employee_id: references::employee_id(pool, &input.employee).await?,
    };
    let member = TrainingTeamRepo::create(pool, &dto, &user.name).await?;

    tracing::info!(
        training_team_id = member.id,
        training_id = member.training_id,
        actor = %user.name,
        "Training team member added",
    );
    let view = load_view(&state, member.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/training-teams/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireLead(user): RequireLead,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTrainingTeamRequest>,
) -> AppResult<Json<DataResponse<TrainingTeamResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let pool = &state.pool;
    let existing = TrainingTeamRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;

    let training_id = match input.training_id {
        Some(training_id) => Some(references::training_id(pool, training_id).await?),
        None => None,
    };
    let employee_id =
        references::optional(input.employee.as_deref(), |n| references::employee_id(pool, n))
            .await?;

    let dto = UpdateTrainingTeam {
        training_id,
        employee_id,
        is_active: input.is_active,
    };
    TrainingTeamRepo::update(pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(training_team_id = id, actor = %user.name, "Training team member reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/training-teams/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TrainingTeamRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(training_team_id = id, actor = %user.name, "Training team member removed");
    Ok(StatusCode::NO_CONTENT)
}
