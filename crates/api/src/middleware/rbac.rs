//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects callers whose role is not in
//! the policy's role set with 403. A missing or invalid token is 401.
//!
//! | Extractor        | Roles                                               |
//! |------------------|-----------------------------------------------------|
//! | [`RequireAuth`]    | any known role                                      |
//! | [`RequireLead`]    | Admin, Director, Project Manager, Team Lead         |
//! | [`RequireManager`] | Admin, Director, Project Manager                    |
//! | [`RequireAdmin`]   | Admin                                               |

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use talentdesk_core::error::CoreError;
use talentdesk_core::roles::{has_any_role, ANY_ROLE, LEAD_ROLES, MANAGER_ROLES, ROLE_ADMIN};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticate, then check the caller's role against `allowed`.
async fn authorize(
    parts: &mut Parts,
    state: &AppState,
    allowed: &[&str],
    requirement: &str,
) -> Result<AuthUser, AppError> {
    let user = AuthUser::from_request_parts(parts, state).await?;
    if !has_any_role(&user.role, allowed) {
        tracing::warn!(
            user = %user.email,
            role = %user.role,
            requirement,
            "Role not permitted"
        );
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "{requirement} role required"
        ))));
    }
    Ok(user)
}

/// Requires the `Admin` role.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, &[ROLE_ADMIN], "Admin")
            .await
            .map(RequireAdmin)
    }
}

/// Requires Admin, Director or Project Manager.
pub struct RequireManager(pub AuthUser);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, MANAGER_ROLES, "Manager")
            .await
            .map(RequireManager)
    }
}

/// Requires Admin, Director, Project Manager or Team Lead.
pub struct RequireLead(pub AuthUser);

impl FromRequestParts<AppState> for RequireLead {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, LEAD_ROLES, "Team Lead")
            .await
            .map(RequireLead)
    }
}

/// Requires any authenticated caller whose role is one of the known roles.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorize(parts, state, ANY_ROLE, "Authenticated")
            .await
            .map(RequireAuth)
    }
}
