//! Repository for the `trainings` table.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use crate::models::training::{CreateTraining, Training, TrainingResponse, UpdateTraining};

const COLUMNS: &str = "id, topic, employee_id, start_date, end_date, status, comments, \
    is_active, created_by, created_at, updated_by, updated_at";

const VIEW: &str = "SELECT t.id, t.topic, e.name AS trainer, t.start_date, t.end_date, \
    t.status, t.comments, t.is_active, t.created_by, t.created_at, \
    t.updated_by, t.updated_at \
    FROM trainings t \
    LEFT JOIN employees e ON e.id = t.employee_id";

/// Provides CRUD operations for trainings.
pub struct TrainingRepo;

impl TrainingRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTraining,
        actor: &str,
    ) -> Result<Training, sqlx::Error> {
        let query = format!(
            "INSERT INTO trainings
                (topic, employee_id, start_date, end_date, status, comments, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(&input.topic)
            .bind(input.employee_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.status)
            .bind(&input.comments)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Training>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM trainings WHERE id = $1");
        sqlx::query_as::<_, Training>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TrainingResponse>, sqlx::Error> {
        let query = format!("{VIEW} WHERE t.id = $1");
        sqlx::query_as::<_, TrainingResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<TrainingResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{VIEW} ORDER BY t.start_date DESC NULLS LAST, t.id")
        } else {
            format!("{VIEW} WHERE t.is_active = true ORDER BY t.start_date DESC NULLS LAST, t.id")
        };
        sqlx::query_as::<_, TrainingResponse>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTraining,
        actor: &str,
    ) -> Result<Option<Training>, sqlx::Error> {
        let query = format!(
            "UPDATE trainings SET
                topic = COALESCE($2, topic),
                employee_id = COALESCE($3, employee_id),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                status = COALESCE($6, status),
                comments = COALESCE($7, comments),
                is_active = COALESCE($8, is_active),
                updated_by = $9,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Training>(&query)
            .bind(id)
            .bind(&input.topic)
            .bind(input.employee_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.status)
            .bind(&input.comments)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE trainings SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
