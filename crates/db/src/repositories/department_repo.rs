//! Repository for the `departments` table.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use crate::models::department::{CreateDepartment, Department, UpdateDepartment};

const COLUMNS: &str =
    "id, name, is_active, created_by, created_at, updated_by, updated_at";

/// Provides CRUD operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a new department, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDepartment,
        actor: &str,
    ) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments (name, created_by) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(&input.name)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a department by exact name, active or not.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE name = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List departments by name, optionally including inactive ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Department>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM departments ORDER BY name")
        } else {
            format!("SELECT {COLUMNS} FROM departments WHERE is_active = true ORDER BY name")
        };
        sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
    }

    /// Update a department. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDepartment,
        actor: &str,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!(
            "UPDATE departments SET
                name = COALESCE($2, name),
                is_active = COALESCE($3, is_active),
                updated_by = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a department. Returns `false` if no row with `id` exists.
    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE departments SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
