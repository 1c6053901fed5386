//! Employee entity model and DTOs.
//!
//! Employees double as the login accounts: `email` is the credential and
//! `role_id` decides what the bearer token allows.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Date, Timestamp};

/// A row from the `employees` table.
///
/// Carries `password_hash`, so it is never serialized. Use
/// [`EmployeeResponse`] for anything that leaves the server.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    pub employee_code: String,
    pub email: String,
    pub phone_no: Option<String>,
    pub password_hash: String,
    pub role_id: DbId,
    pub designation_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub reporting_to: Option<DbId>,
    pub joining_date: Option<Date>,
    pub relieving_date: Option<Date>,
    pub projection: Option<String>,
    pub profile: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

/// Read view: related names instead of ids, technologies as a name list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeResponse {
    pub id: DbId,
    pub name: String,
    pub employee_code: String,
    pub email: String,
    pub phone_no: Option<String>,
    pub role: String,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub reporting_to: Option<String>,
    pub joining_date: Option<Date>,
    pub relieving_date: Option<Date>,
    pub projection: Option<String>,
    pub profile: Option<String>,
    pub technologies: Vec<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

/// Credential lookup result used by the login flow.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeLogin {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub role: String,
}

/// DTO for creating an employee. `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct CreateEmployee {
    pub name: String,
    pub employee_code: String,
    pub email: String,
    pub phone_no: Option<String>,
    pub password_hash: String,
    pub role_id: DbId,
    pub designation_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub reporting_to: Option<DbId>,
    pub joining_date: Option<Date>,
    pub relieving_date: Option<Date>,
    pub projection: Option<String>,
    pub profile: Option<String>,
    pub technology_ids: Vec<DbId>,
}

/// DTO for updating an employee. `None` fields are left unchanged;
/// `technology_ids: Some(..)` replaces the whole technology set.
#[derive(Debug, Clone, Default)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub employee_code: Option<String>,
    pub email: Option<String>,
    pub phone_no: Option<String>,
    pub password_hash: Option<String>,
    pub role_id: Option<DbId>,
    pub designation_id: Option<DbId>,
    pub department_id: Option<DbId>,
    pub reporting_to: Option<DbId>,
    pub joining_date: Option<Date>,
    pub relieving_date: Option<Date>,
    pub projection: Option<String>,
    pub profile: Option<String>,
    pub technology_ids: Option<Vec<DbId>>,
    pub is_active: Option<bool>,
}
