//! Blog entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Date, Timestamp};

/// A row from the `blogs` table.
#[derive(Debug, Clone, FromRow)]
pub struct Blog {
    pub id: DbId,
    pub title: String,
    pub author_id: DbId,
    pub status: Option<String>,
    pub target_date: Option<Date>,
    pub completed_date: Option<Date>,
    pub published_date: Option<Date>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogResponse {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub status: Option<String>,
    pub target_date: Option<Date>,
    pub completed_date: Option<Date>,
    pub published_date: Option<Date>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateBlog {
    pub title: String,
    pub author_id: DbId,
    pub status: Option<String>,
    pub target_date: Option<Date>,
    pub completed_date: Option<Date>,
    pub published_date: Option<Date>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub author_id: Option<DbId>,
    pub status: Option<String>,
    pub target_date: Option<Date>,
    pub completed_date: Option<Date>,
    pub published_date: Option<Date>,
    pub is_active: Option<bool>,
}
