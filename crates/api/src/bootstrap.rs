//! First-run provisioning of an Admin account.
//!
//! Every API route except login requires a token, and tokens are only
//! issued to existing employees, so an empty database needs one Admin
//! created out of band.

use talentdesk_core::roles::ROLE_ADMIN;
use talentdesk_db::models::employee::CreateEmployee;
use talentdesk_db::repositories::{EmployeeRepo, RoleRepo};
use talentdesk_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Employee code given to the bootstrap account.
pub const BOOTSTRAP_EMPLOYEE_CODE: &str = "ADMIN-0001";

/// Audit name stamped into `created_by` for the bootstrap account.
const SYSTEM_ACTOR: &str = "system";

/// Create the configured Admin unless an employee with that email exists.
///
/// Returns `true` when a new account was created.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    if EmployeeRepo::find_by_email(pool, &admin.email)
        .await?
        .is_some()
    {
        tracing::debug!(email = %admin.email, "Bootstrap admin already present");
        return Ok(false);
    }

    let role = RoleRepo::find_by_name(pool, ROLE_ADMIN)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("Role '{ROLE_ADMIN}' is not seeded")))?;
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateEmployee {
        name: admin.name.clone(),
        employee_code: BOOTSTRAP_EMPLOYEE_CODE.to_string(),
        email: admin.email.clone(),
        phone_no: None,
        password_hash,
        role_id: role.id,
        designation_id: None,
        department_id: None,
        reporting_to: None,
        joining_date: None,
        relieving_date: None,
        projection: None,
        profile: None,
        technology_ids: Vec::new(),
    };
    let employee = EmployeeRepo::create(pool, &input, SYSTEM_ACTOR).await?;

    tracing::info!(employee_id = employee.id, email = %employee.email, "Bootstrap admin created");
    Ok(true)
}
