//! Repository for the `technologies` table.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use crate::models::technology::{
    CreateTechnology, Technology, TechnologyResponse, UpdateTechnology,
};

const COLUMNS: &str = "id, name, department_id, is_active, \
    created_by, created_at, updated_by, updated_at";

/// Read-view select with the department joined in.
const VIEW: &str = "SELECT t.id, t.name, d.name AS department, t.is_active, \
    t.created_by, t.created_at, t.updated_by, t.updated_at \
    FROM technologies t \
    LEFT JOIN departments d ON d.id = t.department_id";

/// Provides CRUD operations for technologies.
pub struct TechnologyRepo;

impl TechnologyRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTechnology,
        actor: &str,
    ) -> Result<Technology, sqlx::Error> {
        let query = format!(
            "INSERT INTO technologies (name, department_id, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technology>(&query)
            .bind(&input.name)
            .bind(input.department_id)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Technology>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM technologies WHERE id = $1");
        sqlx::query_as::<_, Technology>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<Technology>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM technologies WHERE name = $1");
        sqlx::query_as::<_, Technology>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every technology whose name is in `names`. Names with no match
    /// are simply absent from the result.
    pub async fn find_by_names(
        pool: &PgPool,
        names: &[String],
    ) -> Result<Vec<Technology>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM technologies WHERE name = ANY($1)");
        sqlx::query_as::<_, Technology>(&query)
            .bind(names)
            .fetch_all(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TechnologyResponse>, sqlx::Error> {
        let query = format!("{VIEW} WHERE t.id = $1");
        sqlx::query_as::<_, TechnologyResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<TechnologyResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{VIEW} ORDER BY t.name")
        } else {
            format!("{VIEW} WHERE t.is_active = true ORDER BY t.name")
        };
        sqlx::query_as::<_, TechnologyResponse>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a technology. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTechnology,
        actor: &str,
    ) -> Result<Option<Technology>, sqlx::Error> {
        let query = format!(
            "UPDATE technologies SET
                name = COALESCE($2, name),
                department_id = COALESCE($3, department_id),
                is_active = COALESCE($4, is_active),
                updated_by = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technology>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.department_id)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE technologies SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
