//! Handlers for the `/trainings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::{Date, DbId};
use talentdesk_core::validation::{validate_date_range, validate_not_blank};
use talentdesk_db::models::training::{CreateTraining, TrainingResponse, UpdateTraining};
use talentdesk_db::repositories::TrainingRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireLead, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Training";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTrainingRequest {
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub topic: String,
    /// Display name of the trainer.
    pub trainer: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTrainingRequest {
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub topic: Option<String>,
    pub trainer: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: Option<bool>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<TrainingResponse> {
    TrainingRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/trainings
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<TrainingResponse>>>> {
    let items = TrainingRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/trainings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TrainingResponse>>> {
    let training = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, training.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: training }))
}

/// POST /api/trainings
pub async fn create(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    ValidatedJson(input): ValidatedJson<CreateTrainingRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<TrainingResponse>>)> {
    validate_date_range("start_date", input.start_date, "end_date", input.end_date)?;
    let employee_id = references::optional(input.trainer.as_deref(), |n| {
        references::employee_id(&state.pool, n)
    })
    .await?;

    let dto = CreateTraining {
        topic: input.topic,
        employee_id,
        start_date: input.start_date,
        end_date: input.end_date,
        status: input.status,
        comments: input.comments,
    };
    let training = TrainingRepo::create(&state.pool, &dto, &user.name).await?;

    tracing::info!(training_id = training.id, topic = %training.topic, actor = %user.name, "Training created");
    let view = load_view(&state, training.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/trainings/{id}
///
/// The date range is checked against the merged result, so moving only the
/// end date before the stored start date is rejected.
pub async fn update(
    State(state): State<AppState>,
    RequireLead(user): RequireLead,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTrainingRequest>,
) -> AppResult<Json<DataResponse<TrainingResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let pool = &state.pool;
    let existing = TrainingRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;
    validate_date_range(
        "start_date",
        input.start_date.or(existing.start_date),
        "end_date",
        input.end_date.or(existing.end_date),
    )?;

    let employee_id =
        references::optional(input.trainer.as_deref(), |n| references::employee_id(pool, n))
            .await?;

    let dto = UpdateTraining {
        topic: input.topic,
        employee_id,
        start_date: input.start_date,
        end_date: input.end_date,
        status: input.status,
        comments: input.comments,
        is_active: input.is_active,
    };
    TrainingRepo::update(pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(training_id = id, actor = %user.name, "Training reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/trainings/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !TrainingRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(training_id = id, actor = %user.name, "Training deactivated");
    Ok(StatusCode::NO_CONTENT)
}
