//! Handlers for the `/auth` resource (login, current caller).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use talentdesk_core::error::CoreError;
use talentdesk_db::repositories::EmployeeRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Always `"Bearer"`.
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub role: String,
    pub name: String,
}

/// Identity carried by the caller's token.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub email: String,
    pub role: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Exchange email + password for a bearer token. Unknown emails and wrong
/// passwords get the same 401 so callers cannot probe for accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    let employee = EmployeeRepo::find_login_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &employee.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(employee_id = employee.id, "Login rejected: wrong password");
        return Err(invalid());
    }

    if !employee.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let jwt = &state.config.jwt;
    let token = generate_token(&employee.email, &employee.role, &employee.name, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(employee_id = employee.id, role = %employee.role, "Employee logged in");

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer",
        expires_in: jwt.expires_in_secs(),
        role: employee.role,
        name: employee.name,
    }))
}

/// GET /api/auth/me
pub async fn me(user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        email: user.email,
        role: user.role,
        name: user.name,
    })
}
