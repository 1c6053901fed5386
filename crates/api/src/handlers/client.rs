//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::DbId;
use talentdesk_core::validation::validate_not_blank;
use talentdesk_db::models::client::{ClientResponse, CreateClient, UpdateClient};
use talentdesk_db::repositories::ClientRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Client";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,
    pub line_of_business: Option<String>,
    pub country: Option<String>,
    /// Display name of the sales employee who owns the account.
    pub sales_employee: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(length(min = 1, max = 100), custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    pub line_of_business: Option<String>,
    pub country: Option<String>,
    pub sales_employee: Option<String>,
    pub is_active: Option<bool>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<ClientResponse> {
    ClientRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

async fn ensure_name_free(state: &AppState, name: &str, current: Option<DbId>) -> AppResult<()> {
    let holder = ClientRepo::find_by_name(&state.pool, name).await?;
    lifecycle::ensure_unique(holder.map(|c| c.id), current, ENTITY, "name", name)?;
    Ok(())
}

/// GET /api/clients
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<ClientResponse>>>> {
    let items = ClientRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ClientResponse>>> {
    let client = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, client.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: client }))
}

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    ValidatedJson(input): ValidatedJson<CreateClientRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ClientResponse>>)> {
    let name = input.name;
    ensure_name_free(&state, &name, None).await?;
    let sales_employee_id = references::optional(input.sales_employee.as_deref(), |n| {
        references::employee_id(&state.pool, n)
    })
    .await?;

    let dto = CreateClient {
        name,
        line_of_business: input.line_of_business,
        country: input.country,
        sales_employee_id,
    };
    let client = ClientRepo::create(&state.pool, &dto, &user.name).await?;

    tracing::info!(client_id = client.id, name = %client.name, actor = %user.name, "Client created");
    let view = load_view(&state, client.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateClientRequest>,
) -> AppResult<Json<DataResponse<ClientResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let existing = ClientRepo::find_by_id(&state.pool, id)
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
    let sales_employee_id = references::optional(input.sales_employee.as_deref(), |n| {
        references::employee_id(&state.pool, n)
    })
    .await?;

    let dto = UpdateClient {
        name,
        line_of_business: input.line_of_business,
        country: input.country,
        sales_employee_id,
        is_active: input.is_active,
    };
    ClientRepo::update(&state.pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(client_id = id, actor = %user.name, "Client reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/clients/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ClientRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(client_id = id, actor = %user.name, "Client deactivated");
    Ok(StatusCode::NO_CONTENT)
}
