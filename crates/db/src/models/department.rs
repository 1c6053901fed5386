//! Department entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Timestamp};

/// A row from the `departments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a department.
#[derive(Debug, Clone)]
pub struct CreateDepartment {
    pub name: String,
}

/// DTO for updating a department. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDepartment {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}
