//! Repository for the `success_stories` table.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use crate::models::success_story::{
    CreateSuccessStory, SuccessStory, SuccessStoryResponse, UpdateSuccessStory,
};

const COLUMNS: &str = "id, client_id, project_id, assigned_to_id, status, comments, \
    is_active, created_by, created_at, updated_by, updated_at";

const VIEW: &str = "SELECT s.id, c.name AS client, p.name AS project, \
    e.name AS assigned_to, s.status, s.comments, s.is_active, s.created_by, \
    s.created_at, s.updated_by, s.updated_at \
    FROM success_stories s \
    LEFT JOIN clients c ON c.id = s.client_id \
    LEFT JOIN projects p ON p.id = s.project_id \
    LEFT JOIN employees e ON e.id = s.assigned_to_id";

/// Provides CRUD operations for success stories.
pub struct SuccessStoryRepo;

impl SuccessStoryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateSuccessStory,
        actor: &str,
    ) -> Result<SuccessStory, sqlx::Error> {
        let query = format!(
            "INSERT INTO success_stories
                (client_id, project_id, assigned_to_id, status, comments, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuccessStory>(&query)
            .bind(input.client_id)
            .bind(input.project_id)
            .bind(input.assigned_to_id)
            .bind(&input.status)
            .bind(&input.comments)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SuccessStory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM success_stories WHERE id = $1");
        sqlx::query_as::<_, SuccessStory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SuccessStoryResponse>, sqlx::Error> {
        let query = format!("{VIEW} WHERE s.id = $1");
        sqlx::query_as::<_, SuccessStoryResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<SuccessStoryResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{VIEW} ORDER BY s.created_at DESC")
        } else {
            format!("{VIEW} WHERE s.is_active = true ORDER BY s.created_at DESC")
        };
        sqlx::query_as::<_, SuccessStoryResponse>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSuccessStory,
        actor: &str,
    ) -> Result<Option<SuccessStory>, sqlx::Error> {
        let query = format!(
            "UPDATE success_stories SET
                client_id = COALESCE($2, client_id),
                project_id = COALESCE($3, project_id),
                assigned_to_id = COALESCE($4, assigned_to_id),
                status = COALESCE($5, status),
                comments = COALESCE($6, comments),
                is_active = COALESCE($7, is_active),
                updated_by = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SuccessStory>(&query)
            .bind(id)
            .bind(input.client_id)
            .bind(input.project_id)
            .bind(input.assigned_to_id)
            .bind(&input.status)
            .bind(&input.comments)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE success_stories SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
