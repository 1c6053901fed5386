//! SOW requirement entity model and DTOs.
//!
//! A requirement asks for `team_size` people of a designation with a set of
//! technologies under one SOW.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Timestamp};

/// A row from the `sow_requirements` table.
#[derive(Debug, Clone, FromRow)]
pub struct SowRequirement {
    pub id: DbId,
    pub sow_id: DbId,
    pub designation_id: Option<DbId>,
    pub team_size: Option<i32>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SowRequirementResponse {
    pub id: DbId,
    pub sow: String,
    pub designation: Option<String>,
    pub team_size: Option<i32>,
    pub technologies: Vec<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateSowRequirement {
    pub sow_id: DbId,
    pub designation_id: Option<DbId>,
    pub team_size: Option<i32>,
    pub technology_ids: Vec<DbId>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSowRequirement {
    pub sow_id: Option<DbId>,
    pub designation_id: Option<DbId>,
    pub team_size: Option<i32>,
    pub technology_ids: Option<Vec<DbId>>,
    pub is_active: Option<bool>,
}
