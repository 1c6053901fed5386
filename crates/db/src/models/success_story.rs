//! Success story entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Timestamp};

/// A row from the `success_stories` table.
#[derive(Debug, Clone, FromRow)]
pub struct SuccessStory {
    pub id: DbId,
    pub client_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub assigned_to_id: Option<DbId>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SuccessStoryResponse {
    pub id: DbId,
    pub client: Option<String>,
    pub project: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateSuccessStory {
    pub client_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub assigned_to_id: Option<DbId>,
    pub status: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSuccessStory {
    pub client_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub assigned_to_id: Option<DbId>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: Option<bool>,
}
