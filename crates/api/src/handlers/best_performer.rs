//! Handlers for the `/best-performers` resource: recognition awards.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::DbId;
use talentdesk_db::models::best_performer::{
    BestPerformerResponse, CreateBestPerformer, UpdateBestPerformer,
};
use talentdesk_db::repositories::BestPerformerRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireLead};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Best performer";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBestPerformerRequest {
    /// Display name of the recognised employee.
    pub employee: String,
    pub client: Option<String>,
    pub project: Option<String>,
    pub award: Option<String>,
    pub period: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBestPerformerRequest {
    pub id: Option<DbId>,
    pub employee: Option<String>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub award: Option<String>,
    pub period: Option<String>,
    pub comments: Option<String>,
    pub is_active: Option<bool>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<BestPerformerResponse> {
    BestPerformerRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/best-performers
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<BestPerformerResponse>>>> {
    let items =
        BestPerformerRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/best-performers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BestPerformerResponse>>> {
    let performer = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, performer.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: performer }))
}

/// POST /api/best-performers
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateBestPerformerRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<BestPerformerResponse>>)> {
    let pool = &state.pool;
    let employee_id = references::employee_id(pool, &input.employee).await?;
    let client_id =
        references::optional(input.client.as_deref(), |n| references::client_id(pool, n)).await?;
    let project_id =
        references::optional(input.project.as_deref(), |n| references::project_id(pool, n))
            .await?;

    let dto = CreateBestPerformer {
        employee_id,
        client_id,
        project_id,
        award: input.award,
        period: input.period,
        comments: input.comments,
    };
    let performer = BestPerformerRepo::create(pool, &dto, &user.name).await?;

    tracing::info!(
        best_performer_id = performer.id,
        employee_id,
        actor = %user.name,
        "Best performer recorded",
    );
    let view = load_view(&state, performer.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/best-performers/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireLead(user): RequireLead,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateBestPerformerRequest>,
) -> AppResult<Json<DataResponse<BestPerformerResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let pool = &state.pool;
    let existing = BestPerformerRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;

    let employee_id =
        references::optional(input.employee.as_deref(), |n| references::employee_id(pool, n))
            .await?;
    let client_id =
        references::optional(input.client.as_deref(), |n| references::client_id(pool, n)).await?;
    let project_id =
        references::optional(input.project.as_deref(), |n| references::project_id(pool, n))
            .await?;

    let dto = UpdateBestPerformer {
        employee_id,
        client_id,
        project_id,
        award: input.award,
        period: input.period,
        comments: input.comments,
        is_active: input.is_active,
    };
    BestPerformerRepo::update(pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(best_performer_id = id, actor = %user.name, "Best performer reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/best-performers/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !BestPerformerRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(best_performer_id = id, actor = %user.name, "Best performer deactivated");
    Ok(StatusCode::NO_CONTENT)
}
