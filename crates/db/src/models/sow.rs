//! Statement-of-work entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Timestamp};

/// A row from the `sows` table.
#[derive(Debug, Clone, FromRow)]
pub struct Sow {
    pub id: DbId,
    pub title: String,
    pub client_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub pre_sales_contact_id: Option<DbId>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SowResponse {
    pub id: DbId,
    pub title: String,
    pub client: Option<String>,
    pub project: Option<String>,
    pub pre_sales_contact: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateSow {
    pub title: String,
    pub client_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub pre_sales_contact_id: Option<DbId>,
    pub status: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSow {
    pub title: Option<String>,
    pub client_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub pre_sales_contact_id: Option<DbId>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: Option<bool>,
}
