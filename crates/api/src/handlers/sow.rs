//! Handlers for the `/sows` (statements of work) resource.
//!
//! Managers may also soft-delete SOWs, unlike most other resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::DbId;
use talentdesk_core::validation::validate_not_blank;
use talentdesk_db::models::sow::{CreateSow, SowResponse, UpdateSow};
use talentdesk_db::repositories::SowRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "SOW";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSowRequest {
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: String,
    pub client: Option<String>,
    pub project: Option<String>,
    pub pre_sales_contact: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSowRequest {
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: Option<String>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub pre_sales_contact: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: Option<bool>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<SowResponse> {
    SowRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

async fn ensure_title_free(state: &AppState, title: &str, current: Option<DbId>) -> AppResult<()> {
    let holder = SowRepo::find_by_title(&state.pool, title).await?;
    lifecycle::ensure_unique(holder.map(|s| s.id), current, ENTITY, "title", title)?;
    Ok(())
}

/// GET /api/sows
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<SowResponse>>>> {
    let items = SowRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/sows/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SowResponse>>> {
    let sow = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, sow.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: sow }))
}

/// POST /api/sows
pub async fn create(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    ValidatedJson(input): ValidatedJson<CreateSowRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<SowResponse>>)> {
    let title = input.title;
    ensure_title_free(&state, &title, None).await?;

    let pool = &state.pool;
    let client_id =
        references::optional(input.client.as_deref(), |n| references::client_id(pool, n)).await?;
    let project_id =
        references::optional(input.project.as_deref(), |n| references::project_id(pool, n))
            .await?;
    let pre_sales_contact_id = references::optional(input.pre_sales_contact.as_deref(), |n| {
        references::employee_id(pool, n)
    })
    .await?;

    let dto = CreateSow {
        title,
        client_id,
        project_id,
        pre_sales_contact_id,
        status: input.status,
        comments: input.comments,
    };
    let sow = SowRepo::create(pool, &dto, &user.name).await?;

    tracing::info!(sow_id = sow.id, title = %sow.title, actor = %user.name, "SOW created");
    let view = load_view(&state, sow.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/sows/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateSowRequest>,
) -> AppResult<Json<DataResponse<SowResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let pool = &state.pool;
    let existing = SowRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;

    let title = input.title;
    if let Some(title) = &title {
        ensure_title_free(&state, title, Some(id)).await?;
    }
    let client_id =
        references::optional(input.client.as_deref(), |n| references::client_id(pool, n)).await?;
    let project_id =
        references::optional(input.project.as_deref(), |n| references::project_id(pool, n))
            .await?;
    let pre_sales_contact_id = references::optional(input.pre_sales_contact.as_deref(), |n| {
        references::employee_id(pool, n)
    })
    .await?;

    let dto = UpdateSow {
        title,
        client_id,
        project_id,
        pre_sales_contact_id,
        status: input.status,
        comments: input.comments,
        is_active: input.is_active,
    };
    SowRepo::update(pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(sow_id = id, actor = %user.name, "SOW reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/sows/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !SowRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(sow_id = id, actor = %user.name, "SOW deactivated");
    Ok(StatusCode::NO_CONTENT)
}
