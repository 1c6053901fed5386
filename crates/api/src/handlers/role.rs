//! Handler for the read-only `/roles` lookup.

use axum::extract::State;
use axum::Json;
use talentdesk_db::models::role::Role;
use talentdesk_db::repositories::RoleRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/roles
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Role>>>> {
    let roles = RoleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: roles }))
}
