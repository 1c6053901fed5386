//! Repository for the `best_performers` table.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use crate::models::best_performer::{
    BestPerformer, BestPerformerResponse, CreateBestPerformer, UpdateBestPerformer,
};

const COLUMNS: &str = "id, employee_id, client_id, project_id, award, period, comments, \
    is_active, created_by, created_at, updated_by, updated_at";

const VIEW: &str = "SELECT b.id, e.name AS employee, c.name AS client, p.name AS project, \
    b.award, b.period, b.comments, b.is_active, b.created_by, b.created_at, \
    b.updated_by, b.updated_at \
    FROM best_performers b \
    JOIN employees e ON e.id = b.employee_id \
    LEFT JOIN clients c ON c.id = b.client_id \
    LEFT JOIN projects p ON p.id = b.project_id";

/// Provides CRUD operations for best performer awards.
pub struct BestPerformerRepo;

impl BestPerformerRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateBestPerformer,
        actor: &str,
    ) -> Result<BestPerformer, sqlx::Error> {
        let query = format!(
            "INSERT INTO best_performers
                (employee_id, client_id, project_id, award, period, comments, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BestPerformer>(&query)
            .bind(input.employee_id)
            .bind(input.client_id)
            .bind(input.project_id)
            .bind(&input.award)
            .bind(&input.period)
            .bind(&input.comments)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BestPerformer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM best_performers WHERE id = $1");
        sqlx::query_as::<_, BestPerformer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BestPerformerResponse>, sqlx::Error> {
        let query = format!("{VIEW} WHERE b.id = $1");
        sqlx::query_as::<_, BestPerformerResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<BestPerformerResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{VIEW} ORDER BY b.created_at DESC")
        } else {
            format!("{VIEW} WHERE b.is_active = true ORDER BY b.created_at DESC")
        };
        sqlx::query_as::<_, BestPerformerResponse>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBestPerformer,
        actor: &str,
    ) -> Result<Option<BestPerformer>, sqlx::Error> {
        let query = format!(
            "UPDATE best_performers SET
                employee_id = COALESCE($2, employee_id),
                client_id = COALESCE($3, client_id),
                project_id = COALESCE($4, project_id),
                award = COALESCE($5, award),
                period = COALESCE($6, period),
                comments = COALESCE($7, comments),
                is_active = COALESCE($8, is_active),
                updated_by = $9,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BestPerformer>(&query)
            .bind(id)
            .bind(input.employee_id)
            .bind(input.client_id)
            .bind(input.project_id)
            .bind(&input.award)
            .bind(&input.period)
            .bind(&input.comments)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE best_performers SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
