//! Repository for the `training_teams` table.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use crate::models::training_team::{
    CreateTrainingTeam, TrainingTeam, TrainingTeamResponse, UpdateTrainingTeam,
};

const COLUMNS: &str = "id, training_id, employee_id, \
    is_active, created_by, created_at, updated_by, updated_at";

const VIEW: &str = "SELECT tt.id, tt.training_id, t.topic AS training, e.name AS employee, \
    tt.is_active, tt.created_by, tt.created_at, tt.updated_by, tt.updated_at \
    FROM training_teams tt \
    JOIN trainings t ON t.id = tt.training_id \
    JOIN employees e ON e.id = tt.employee_id";

/// Provides CRUD operations for training team memberships.
pub struct TrainingTeamRepo;

impl TrainingTeamRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTrainingTeam,
        actor: &str,
    ) -> Result<TrainingTeam, sqlx::Error> {
        let query = format!(
            "INSERT INTO training_teams (training_id, employee_id, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainingTeam>(&query)
            .bind(input.training_id)
            .bind(input.employee_id)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TrainingTeam>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM training_teams WHERE id = $1");
        sqlx::query_as::<_, TrainingTeam>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TrainingTeamResponse>, sqlx::Error> {
        let query = format!("{VIEW} WHERE tt.id = $1");
        sqlx::query_as::<_, TrainingTeamResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<TrainingTeamResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{VIEW} ORDER BY tt.training_id, e.name")
        } else {
            format!("{VIEW} WHERE tt.is_active = true ORDER BY tt.training_id, e.name")
        };
        sqlx::query_as::<_, TrainingTeamResponse>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTrainingTeam,
        actor: &str,
    ) -> Result<Option<TrainingTeam>, sqlx::Error> {
        let query = format!(
            "UPDATE training_teams SET
                training_id = COALESCE($2, training_id),
                employee_id = COALESCE($3, employee_id),
                is_active = COALESCE($4, is_active),
                updated_by = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainingTeam>(&query)
            .bind(id)
            .bind(input.training_id)
            .bind(input.employee_id)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE training_teams SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
