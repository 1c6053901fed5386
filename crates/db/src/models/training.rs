//! Training entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Date, Timestamp};

/// A row from the `trainings` table. `employee_id` is the trainer.
#[derive(Debug, Clone, FromRow)]
pub struct Training {
    pub id: DbId,
    pub topic: String,
    pub employee_id: Option<DbId>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainingResponse {
    pub id: DbId,
    pub topic: String,
    pub trainer: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateTraining {
    pub topic: String,
    pub employee_id: Option<DbId>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTraining {
    pub topic: Option<String>,
    pub employee_id: Option<DbId>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: Option<bool>,
}
