//! Best performer award model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Timestamp};

/// A row from the `best_performers` table.
#[derive(Debug, Clone, FromRow)]
pub struct BestPerformer {
    pub id: DbId,
    pub employee_id: DbId,
    pub client_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub award: Option<String>,
    pub period: Option<String>,
    pub comments: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BestPerformerResponse {
    pub id: DbId,
    pub employee: String,
    pub client: Option<String>,
    pub project: Option<String>,
    pub award: Option<String>,
    pub period: Option<String>,
    pub comments: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateBestPerformer {
    pub employee_id: DbId,
    pub client_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub award: Option<String>,
    pub period: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBestPerformer {
    pub employee_id: Option<DbId>,
    pub client_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub award: Option<String>,
    pub period: Option<String>,
    pub comments: Option<String>,
    pub is_active: Option<bool>,
}
