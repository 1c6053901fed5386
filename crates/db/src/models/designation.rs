//! Designation entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Timestamp};

/// A row from the `designations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Designation {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateDesignation {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDesignation {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}
