//! Technology entity model and DTOs.
//!
//! A technology optionally belongs to a department.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Timestamp};

/// A row from the `technologies` table.
#[derive(Debug, Clone, FromRow)]
pub struct Technology {
    pub id: DbId,
    pub name: String,
    pub department_id: Option<DbId>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

/// Read view with the department name in place of its id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TechnologyResponse {
    pub id: DbId,
    pub name: String,
    pub department: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateTechnology {
    pub name: String,
    pub department_id: Option<DbId>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTechnology {
    pub name: Option<String>,
    pub department_id: Option<DbId>,
    pub is_active: Option<bool>,
}
