//! Repository for the `designations` table.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use crate::models::designation::{CreateDesignation, Designation, UpdateDesignation};

const COLUMNS: &str =
    "id, name, is_active, created_by, created_at, updated_by, updated_at";

/// Provides CRUD operations for designations.
pub struct DesignationRepo;

impl DesignationRepo {
    /// Insert a new designation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDesignation,
        actor: &str,
    ) -> Result<Designation, sqlx::Error> {
        let query = format!(
            "INSERT INTO designations (name, created_by) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Designation>(&query)
            .bind(&input.name)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Designation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM designations WHERE id = $1");
        sqlx::query_as::<_, Designation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a designation by exact name, active or not.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Designation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM designations WHERE name = $1");
        sqlx::query_as::<_, Designation>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List designations by name, optionally including inactive ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Designation>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM designations ORDER BY name")
        } else {
            format!("SELECT {COLUMNS} FROM designations WHERE is_active = true ORDER BY name")
        };
        sqlx::query_as::<_, Designation>(&query).fetch_all(pool).await
    }

    /// Update a designation. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDesignation,
        actor: &str,
    ) -> Result<Option<Designation>, sqlx::Error> {
        let query = format!(
            "UPDATE designations SET
                name = COALESCE($2, name),
                is_active = COALESCE($3, is_active),
                updated_by = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Designation>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a designation. Returns `false` if no row with `id` exists.
    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE designations SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
