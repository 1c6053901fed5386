//! Project entity model and DTOs.
//!
//! A project belongs to exactly one client and tracks the key dates of its
//! statement of work alongside the people responsible for it.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Date, Timestamp};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub client_id: DbId,
    pub technical_project_manager_id: Option<DbId>,
    pub sales_contact_id: Option<DbId>,
    pub pmo_id: Option<DbId>,
    pub sow_submitted_date: Option<Date>,
    pub sow_signed_date: Option<Date>,
    pub sow_valid_till: Option<Date>,
    pub sow_last_extended_date: Option<Date>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectResponse {
    pub id: DbId,
    pub name: String,
    pub client: String,
    pub technical_project_manager: Option<String>,
    pub sales_contact: Option<String>,
    pub pmo: Option<String>,
    pub sow_submitted_date: Option<Date>,
    pub sow_signed_date: Option<Date>,
    pub sow_valid_till: Option<Date>,
    pub sow_last_extended_date: Option<Date>,
    pub technologies: Vec<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub client_id: DbId,
    pub technical_project_manager_id: Option<DbId>,
    pub sales_contact_id: Option<DbId>,
    pub pmo_id: Option<DbId>,
    pub sow_submitted_date: Option<Date>,
    pub sow_signed_date: Option<Date>,
    pub sow_valid_till: Option<Date>,
    pub sow_last_extended_date: Option<Date>,
    pub technology_ids: Vec<DbId>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub client_id: Option<DbId>,
    pub technical_project_manager_id: Option<DbId>,
    pub sales_contact_id: Option<DbId>,
    pub pmo_id: Option<DbId>,
    pub sow_submitted_date: Option<Date>,
    pub sow_signed_date: Option<Date>,
    pub sow_valid_till: Option<Date>,
    pub sow_last_extended_date: Option<Date>,
    pub technology_ids: Option<Vec<DbId>>,
    pub is_active: Option<bool>,
}
