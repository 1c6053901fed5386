//! Repository for the seeded `roles` lookup table.

use sqlx::PgPool;

use crate::models::role::Role;

const COLUMNS: &str = "id, name, description, created_at";

/// Read-only access to roles.
pub struct RoleRepo;

impl RoleRepo {
    /// List all roles ordered by id (seed order).
    pub async fn list(pool: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles ORDER BY id");
        sqlx::query_as::<_, Role>(&query).fetch_all(pool).await
    }

    /// Find a role by its exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE name = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
