//! Handlers for the `/success-stories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::DbId;
use talentdesk_db::models::success_story::{
    CreateSuccessStory, SuccessStoryResponse, UpdateSuccessStory,
};
use talentdesk_db::repositories::SuccessStoryRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireLead};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Success story";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSuccessStoryRequest {
    pub client: Option<String>,
    pub project: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSuccessStoryRequest {
    pub id: Option<DbId>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: Option<bool>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<SuccessStoryResponse> {
    SuccessStoryRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/success-stories
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<SuccessStoryResponse>>>> {
    let items =
        SuccessStoryRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/success-stories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SuccessStoryResponse>>> {
    let story = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, story.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: story }))
}

/// POST /api/success-stories
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateSuccessStoryRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<SuccessStoryResponse>>)> {
    let pool = &state.pool;
    let dto = CreateSuccessStory {
        client_id: references::optional(input.client.as_deref(), |n| {
            references::client_id(pool, n)
        })
        .await?,
        project_id: references::optional(input.project.as_deref(), |n| {
            references::project_id(pool, n)
        })
        .await?,
        assigned_to_id: references::optional(input.assigned_to.as_deref(), |n| {
            references::employee_id(pool, n)
        })
        .await?,
        status: input.status,
        comments: input.comments,
    };
    let story = SuccessStoryRepo::create(pool, &dto, &user.name).await?;

    tracing::info!(success_story_id = story.id, actor = %user.name, "Success story created");
    let view = load_view(&state, story.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/success-stories/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireLead(user): RequireLead,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateSuccessStoryRequest>,
) -> AppResult<Json<DataResponse<SuccessStoryResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let pool = &state.pool;
    let existing = SuccessStoryRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;

    let dto = UpdateSuccessStory {
        client_id: references::optional(input.client.as_deref(), |n| {
            references::client_id(pool, n)
        })
        .await?,
        project_id: references::optional(input.project.as_deref(), |n| {
            references::project_id(pool, n)
        })
        .await?,
        assigned_to_id: references::optional(input.assigned_to.as_deref(), |n| {
            references::employee_id(pool, n)
        })
        .await?,
        status: input.status,
        comments: input.comments,
        is_active: input.is_active,
    };
    SuccessStoryRepo::update(pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(success_story_id = id, actor = %user.name, "Success story reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/success-stories/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SuccessStoryRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(success_story_id = id, actor = %user.name, "Success story deactivated");
    Ok(StatusCode::NO_CONTENT)
}
