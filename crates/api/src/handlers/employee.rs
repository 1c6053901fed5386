//! Handlers for the `/employees` resource.
//!
//! Employees are also the login accounts, so create/update hash the supplied
//! password and the read views never carry the hash.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::{Date, DbId};
use talentdesk_core::validation::{
    validate_date_range, validate_not_blank, validate_password_strength,
};
use talentdesk_db::models::employee::{CreateEmployee, EmployeeResponse, UpdateEmployee};
use talentdesk_db::repositories::EmployeeRepo;
use validator::Validate;

use super::references;
use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Employee";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /employees`. Related records are named, not ids.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(length(min = 3, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(custom(function = "validate_not_blank"))]
    pub employee_code: String,
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(email)]
    pub email: String,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    pub phone_no: Option<String>,
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
    /// Role name, e.g. `"Team Member"`.
    pub role: String,
    pub designation: Option<String>,
    pub department: Option<String>,
    /// Display name of the manager.
    pub reporting_to: Option<String>,
    pub joining_date: Option<Date>,
    pub relieving_date: Option<Date>,
    pub projection: Option<String>,
    pub profile: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Request body for `PUT /employees/{id}`. Absent fields are unchanged;
/// `technologies`, when present, replaces the whole set.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(length(min = 3, max = 100), custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(custom(function = "validate_not_blank"))]
    pub employee_code: Option<String>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    pub phone_no: Option<String>,
    #[validate(custom(function = "validate_password_strength"))]
    pub password: Option<String>,
    pub role: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub reporting_to: Option<String>,
    pub joining_date: Option<Date>,
    pub relieving_date: Option<Date>,
    pub projection: Option<String>,
    pub profile: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<EmployeeResponse> {
    EmployeeRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Values that must be unique across employees, as supplied by a request.
struct UniqueFields<'a> {
    name: Option<&'a str>,
    employee_code: Option<&'a str>,
    email: Option<&'a str>,
    phone_no: Option<&'a str>,
}

async fn ensure_unique_fields(
    state: &AppState,
    fields: UniqueFields<'_>,
    current: Option<DbId>,
) -> AppResult<()> {
    let pool = &state.pool;
    if let Some(name) = fields.name {
        let holder = EmployeeRepo::find_by_name(pool, name).await?;
        lifecycle::ensure_unique(holder.map(|e| e.id), current, ENTITY, "name", name)?;
    }
    if let Some(code) = fields.employee_code {
        let holder = EmployeeRepo::find_by_employee_code(pool, code).await?;
        lifecycle::ensure_unique(holder.map(|e| e.id), current, ENTITY, "employee_code", code)?;
    }
    if let Some(email) = fields.email {
        let holder = EmployeeRepo::find_by_email(pool, email).await?;
        lifecycle::ensure_unique(holder.map(|e| e.id), current, ENTITY, "email", email)?;
    }
    if let Some(phone) = fields.phone_no {
        let holder = EmployeeRepo::find_by_phone_no(pool, phone).await?;
        lifecycle::ensure_unique(holder.map(|e| e.id), current, ENTITY, "phone_no", phone)?;
    }
    Ok(())
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/employees
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<EmployeeResponse>>>> {
    let items = EmployeeRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EmployeeResponse>>> {
    let employee = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, employee.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: employee }))
}

/// POST /api/employees
///
/// Resolves role, designation, department, manager and technologies by name
/// before inserting anything.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<EmployeeResponse>>)> {
    validate_date_range(
        "joining_date",
        input.joining_date,
        "relieving_date",
        input.relieving_date,
    )?;

    let name = input.name;
    let employee_code = input.employee_code;
    let email = input.email;
    let phone_no = input.phone_no;
    ensure_unique_fields(
        &state,
        UniqueFields {
            name: Some(&name),
            employee_code: Some(&employee_code),
            email: Some(&email),
            phone_no: phone_no.as_deref(),
        },
        None,
    )
    .await?;

    let pool = &state.pool;
    let role_id = references::role_id(pool, &input.role).await?;
    let designation_id = references::optional(input.designation.as_deref(), |n| {
        references::designation_id(pool, n)
    })
    .await?;
    let department_id = references::optional(input.department.as_deref(), |n| {
        references::department_id(pool, n)
    })
    .await?;
    let reporting_to = references::optional(input.reporting_to.as_deref(), |n| {
        references::employee_id(pool, n)
    })
    .await?;
    let technology_ids = references::technology_ids(pool, &input.technologies).await?;

    let dto = CreateEmployee {
        name,
        employee_code,
        email,
        phone_no,
        password_hash: hash(&input.password)?,
        role_id,
        designation_id,
        department_id,
        reporting_to,
        joining_date: input.joining_date,
        relieving_date: input.relieving_date,
        projection: input.projection,
        profile: input.profile,
        technology_ids,
    };
    let employee = EmployeeRepo::create(pool, &dto, &user.name).await?;

    tracing::info!(
        employee_id = employee.id,
        name = %employee.name,
        actor = %user.name,
        "Employee created"
    );
    let view = load_view(&state, employee.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/employees/{id}
///
/// Partial update. A new `password` is re-hashed. Only an Admin may
/// reactivate an inactive employee.
pub async fn update(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateEmployeeRequest>,
) -> AppResult<Json<DataResponse<EmployeeResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let pool = &state.pool;
    let existing = EmployeeRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;

    // Check the range the row will have after the update.
    validate_date_range(
        "joining_date",
        input.joining_date.or(existing.joining_date),
        "relieving_date",
        input.relieving_date.or(existing.relieving_date),
    )?;

    let name = input.name;
    let employee_code = input.employee_code;
    let email = input.email;
    let phone_no = input.phone_no;
    ensure_unique_fields(
        &state,
        UniqueFields {
            name: name.as_deref(),
            employee_code: employee_code.as_deref(),
            email: email.as_deref(),
            phone_no: phone_no.as_deref(),
        },
        Some(id),
    )
    .await?;

    let role_id = references::optional(input.role.as_deref(), |n| references::role_id(pool, n))
        .await?;
    let designation_id = references::optional(input.designation.as_deref(), |n| {
        references::designation_id(pool, n)
    })
    .await?;
    let department_id = references::optional(input.department.as_deref(), |n| {
        references::department_id(pool, n)
    })
    .await?;
    let reporting_to = references::optional(input.reporting_to.as_deref(), |n| {
        references::employee_id(pool, n)
    })
    .await?;
    if reporting_to == Some(id) {
        return Err(AppError::Core(CoreError::Validation(
            "An employee cannot report to themselves".into(),
        )));
    }
    let technology_ids =
        references::optional_technology_ids(pool, input.technologies.as_deref()).await?;

    let password_hash = input.password.as_deref().map(hash).transpose()?;

    let dto = UpdateEmployee {
        name,
        employee_code,
        email,
        phone_no,
        password_hash,
        role_id,
        designation_id,
        department_id,
        reporting_to,
        joining_date: input.joining_date,
        relieving_date: input.relieving_date,
        projection: input.projection,
        profile: input.profile,
        technology_ids,
        is_active: input.is_active,
    };
    EmployeeRepo::update(pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(employee_id = id, actor = %user.name, "Employee reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/employees/{id}
///
/// Soft delete. A deactivated employee can no longer log in.
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !EmployeeRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(employee_id = id, actor = %user.name, "Employee deactivated");
    Ok(StatusCode::NO_CONTENT)
}
