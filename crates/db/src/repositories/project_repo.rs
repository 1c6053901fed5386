//! Repository for the `projects` table and its technology links.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use super::technology_links::TechnologyLinks;
use crate::models::project::{CreateProject, Project, ProjectResponse, UpdateProject};

const COLUMNS: &str = "id, name, client_id, technical_project_manager_id, \
    sales_contact_id, pmo_id, sow_submitted_date, sow_signed_date, sow_valid_till, \
    sow_last_extended_date, is_active, created_by, created_at, updated_by, updated_at";

const LINKS: TechnologyLinks = TechnologyLinks {
    table: "project_technologies",
    owner_column: "project_id",
};

fn view_select() -> String {
    format!(
        "SELECT p.id, p.name, c.name AS client, \
            tpm.name AS technical_project_manager, sc.name AS sales_contact, \
            pmo.name AS pmo, p.sow_submitted_date, p.sow_signed_date, \
            p.sow_valid_till, p.sow_last_extended_date, {techs} AS technologies, \
            p.is_active, p.created_by, p.created_at, p.updated_by, p.updated_at \
         FROM projects p \
         JOIN clients c ON c.id = p.client_id \
         LEFT JOIN employees tpm ON tpm.id = p.technical_project_manager_id \
         LEFT JOIN employees sc ON sc.id = p.sales_contact_id \
         LEFT JOIN employees pmo ON pmo.id = p.pmo_id",
        techs = LINKS.names_expr("p.id"),
    )
}

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project and its technology links in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        actor: &str,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects
                (name, client_id, technical_project_manager_id, sales_contact_id, pmo_id,
                 sow_submitted_date, sow_signed_date, sow_valid_till,
                 sow_last_extended_date, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(input.client_id)
            .bind(input.technical_project_manager_id)
            .bind(input.sales_contact_id)
            .bind(input.pmo_id)
            .bind(input.sow_submitted_date)
            .bind(input.sow_signed_date)
            .bind(input.sow_valid_till)
            .bind(input.sow_last_extended_date)
            .bind(actor)
            .fetch_one(&mut *tx)
            .await?;

        if !input.technology_ids.is_empty() {
            LINKS
                .replace(&mut *tx, project.id, &input.technology_ids)
                .await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE name = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectResponse>, sqlx::Error> {
        let query = format!("{} WHERE p.id = $1", view_select());
        sqlx::query_as::<_, ProjectResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<ProjectResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{} ORDER BY p.name", view_select())
        } else {
            format!("{} WHERE p.is_active = true ORDER BY p.name", view_select())
        };
        sqlx::query_as::<_, ProjectResponse>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields are applied; `technology_ids`
    /// replaces the whole set when present.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
        actor: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                client_id = COALESCE($3, client_id),
                technical_project_manager_id = COALESCE($4, technical_project_manager_id),
                sales_contact_id = COALESCE($5, sales_contact_id),
                pmo_id = COALESCE($6, pmo_id),
                sow_submitted_date = COALESCE($7, sow_submitted_date),
                sow_signed_date = COALESCE($8, sow_signed_date),
                sow_valid_till = COALESCE($9, sow_valid_till),
                sow_last_extended_date = COALESCE($10, sow_last_extended_date),
                is_active = COALESCE($11, is_active),
                updated_by = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.client_id)
            .bind(input.technical_project_manager_id)
            .bind(input.sales_contact_id)
            .bind(input.pmo_id)
            .bind(input.sow_submitted_date)
            .bind(input.sow_signed_date)
            .bind(input.sow_valid_till)
            .bind(input.sow_last_extended_date)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(&mut *tx)
            .await?;

        if let (Some(project), Some(technology_ids)) = (&project, &input.technology_ids) {
            LINKS.replace(&mut *tx, project.id, technology_ids).await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
