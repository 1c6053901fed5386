//! Repository for the `blogs` table.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use crate::models::blog::{Blog, BlogResponse, CreateBlog, UpdateBlog};

const COLUMNS: &str = "id, title, author_id, status, target_date, completed_date, \
    published_date, is_active, created_by, created_at, updated_by, updated_at";

const VIEW: &str = "SELECT b.id, b.title, a.name AS author, b.status, b.target_date, \
    b.completed_date, b.published_date, b.is_active, b.created_by, b.created_at, \
    b.updated_by, b.updated_at \
    FROM blogs b \
    JOIN employees a ON a.id = b.author_id";

/// Provides CRUD operations for blogs.
pub struct BlogRepo;

impl BlogRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateBlog,
        actor: &str,
    ) -> Result<Blog, sqlx::Error> {
        let query = format!(
            "INSERT INTO blogs
                (title, author_id, status, target_date, completed_date, published_date, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(&input.status)
            .bind(input.target_date)
            .bind(input.completed_date)
            .bind(input.published_date)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE id = $1");
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BlogResponse>, sqlx::Error> {
        let query = format!("{VIEW} WHERE b.id = $1");
        sqlx::query_as::<_, BlogResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List blogs, newest target date first.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<BlogResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{VIEW} ORDER BY b.target_date DESC NULLS LAST, b.id")
        } else {
            format!("{VIEW} WHERE b.is_active = true ORDER BY b.target_date DESC NULLS LAST, b.id")
        };
        sqlx::query_as::<_, BlogResponse>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlog,
        actor: &str,
    ) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!(
            "UPDATE blogs SET
                title = COALESCE($2, title),
                author_id = COALESCE($3, author_id),
                status = COALESCE($4, status),
                target_date = COALESCE($5, target_date),
                completed_date = COALESCE($6, completed_date),
                published_date = COALESCE($7, published_date),
                is_active = COALESCE($8, is_active),
                updated_by = $9,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(&input.status)
            .bind(input.target_date)
            .bind(input.completed_date)
            .bind(input.published_date)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE blogs SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
