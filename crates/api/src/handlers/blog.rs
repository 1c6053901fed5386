//! Handlers for the `/blogs` resource.
//!
//! Blog tracking is open to team leads and above; only admins deactivate.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::{Date, DbId};
use talentdesk_core::validation::validate_not_blank;
use talentdesk_db::models::blog::{BlogResponse, CreateBlog, UpdateBlog};
use talentdesk_db::repositories::BlogRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireLead};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Blog";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: String,
    /// Display name of the authoring employee.
    pub author: String,
    pub status: Option<String>,
    pub target_date: Option<Date>,
    pub completed_date: Option<Date>,
    pub published_date: Option<Date>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub title: Option<String>,
    pub author: Option<String>,
    pub status: Option<String>,
    pub target_date: Option<Date>,
    pub completed_date: Option<Date>,
    pub published_date: Option<Date>,
    pub is_active: Option<bool>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<BlogResponse> {
    BlogRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/blogs
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<BlogResponse>>>> {
    let items = BlogRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/blogs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BlogResponse>>> {
    let blog = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, blog.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: blog }))
}

/// POST /api/blogs
pub async fn create(
    State(state): State<AppState>,
    RequireLead(user): RequireLead,
    ValidatedJson(input): ValidatedJson<CreateBlogRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<BlogResponse>>)> {
    let author_id = references::employee_id(&state.pool, &input.author).await?;

    let dto = CreateBlog {
        title: input.title,
        author_id,
        status: input.status,
        target_date: input.target_date,
        completed_date: input.completed_date,
        published_date: input.published_date,
    };
    let blog = BlogRepo::create(&state.pool, &dto, &user.name).await?;

    tracing::info!(blog_id = blog.id, title = %blog.title, actor = %user.name, "Blog created");
    let view = load_view(&state, blog.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/blogs/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireLead(user): RequireLead,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateBlogRequest>,
) -> AppResult<Json<DataResponse<BlogResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let pool = &state.pool;
    let existing = BlogRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;

    let author_id =
        references::optional(input.author.as_deref(), |n| references::employee_id(pool, n))
            .await?;

    let dto = UpdateBlog {
        title: input.title,
        author_id,
        status: input.status,
        target_date: input.target_date,
        completed_date: input.completed_date,
        published_date: input.published_date,
        is_active: input.is_active,
    };
    BlogRepo::update(pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(blog_id = id, actor = %user.name, "Blog reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/blogs/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !BlogRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(blog_id = id, actor = %user.name, "Blog deactivated");
    Ok(StatusCode::NO_CONTENT)
}
