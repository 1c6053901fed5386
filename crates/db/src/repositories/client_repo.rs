//! Repository for the `clients` table.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use crate::models::client::{Client, ClientResponse, CreateClient, UpdateClient};

const COLUMNS: &str = "id, name, line_of_business, country, sales_employee_id, \
    is_active, created_by, created_at, updated_by, updated_at";

const VIEW: &str = "SELECT c.id, c.name, c.line_of_business, c.country, \
    s.name AS sales_employee, c.is_active, c.created_by, c.created_at, \
    c.updated_by, c.updated_at \
    FROM clients c \
    LEFT JOIN employees s ON s.id = c.sales_employee_id";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateClient,
        actor: &str,
    ) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, line_of_business, country, sales_employee_id, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.line_of_business)
            .bind(&input.country)
            .bind(input.sales_employee_id)
            .bind(actor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE name = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ClientResponse>, sqlx::Error> {
        let query = format!("{VIEW} WHERE c.id = $1");
        sqlx::query_as::<_, ClientResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<ClientResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{VIEW} ORDER BY c.name")
        } else {
            format!("{VIEW} WHERE c.is_active = true ORDER BY c.name")
        };
        sqlx::query_as::<_, ClientResponse>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a client. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
        actor: &str,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = COALESCE($2, name),
                line_of_business = COALESCE($3, line_of_business),
                country = COALESCE($4, country),
                sales_employee_id = COALESCE($5, sales_employee_id),
                is_active = COALESCE($6, is_active),
                updated_by = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.line_of_business)
            .bind(&input.country)
            .bind(input.sales_employee_id)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE clients SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
