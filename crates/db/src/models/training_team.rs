//! Training team membership model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Timestamp};

/// A row from the `training_teams` table: one attendee of one training.
#[derive(Debug, Clone, FromRow)]
pub struct TrainingTeam {
    pub id: DbId,
    pub training_id: DbId,
    pub employee_id: DbId,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

/// Read view. Trainings are not uniquely named, so the id is kept next to
/// the topic.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainingTeamResponse {
    pub id: DbId,
    pub training_id: DbId,
    pub training: String,
    pub employee: String,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateTrainingTeam {
    pub training_id: DbId,
    pub employee_id: DbId,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTrainingTeam {
    pub training_id: Option<DbId>,
    pub employee_id: Option<DbId>,
    pub is_active: Option<bool>,
}
