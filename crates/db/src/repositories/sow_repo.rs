//! Repository for the `sows` table.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use crate::models::sow::{CreateSow, Sow, SowResponse, UpdateSow};

const COLUMNS: &str = "id, title, client_id, project_id, pre_sales_contact_id, \
    status, comments, is_active, created_by, created_at, updated_by, updated_at";

const VIEW: &str = "SELECT s.id, s.title, c.name AS client, p.name AS project, \
    e.name AS pre_sales_contact, s.status, s.comments, s.is_active, \
    s.created_by, s.created_at, s.updated_by, s.updated_at \
    FROM sows s \
    LEFT JOIN clients c ON c.id = s.client_id \
    LEFT JOIN projects p ON p.id = s.project_id \
    LEFT JOIN employees e ON e.id = s.pre_sales_contact_id";

/// Provides CRUD operations for statements of work.
pub struct SowRepo;

impl SowRepo {
    pub async fn create(pool: &PgPool, input: &CreateSow, actor: &str) -> Result<Sow, sqlx::Error> {
        let query = format!(
            "INSERT INTO sows
                (title, client_id, project_id, pre_sales_contact_id, status, comments, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sow>(&query)
            .bind(&input.title)
            .bind(input.client_id)
            .bind(input.project_id)
            .bind(input.pre_sales_contact_id)
            .bind(&input.status)
            .bind(&input.comments)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sows WHERE id = $1");
        sqlx::query_as::<_, Sow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a SOW by its unique title.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Sow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sows WHERE title = $1");
        sqlx::query_as::<_, Sow>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SowResponse>, sqlx::Error> {
        let query = format!("{VIEW} WHERE s.id = $1");
        sqlx::query_as::<_, SowResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<SowResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{VIEW} ORDER BY s.created_at DESC")
        } else {
            format!("{VIEW} WHERE s.is_active = true ORDER BY s.created_at DESC")
        };
        sqlx::query_as::<_, SowResponse>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSow,
        actor: &str,
    ) -> Result<Option<Sow>, sqlx::Error> {
        let query = format!(
            "UPDATE sows SET
                title = COALESCE($2, title),
                client_id = COALESCE($3, client_id),
                project_id = COALESCE($4, project_id),
                pre_sales_contact_id = COALESCE($5, pre_sales_contact_id),
                status = COALESCE($6, status),
                comments = COALESCE($7, comments),
                is_active = COALESCE($8, is_active),
                updated_by = $9,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.client_id)
            .bind(input.project_id)
            .bind(input.pre_sales_contact_id)
            .bind(&input.status)
            .bind(&input.comments)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sows SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
