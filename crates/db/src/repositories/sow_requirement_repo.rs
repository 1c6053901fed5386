//! Repository for the `sow_requirements` table and its technology links.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use super::technology_links::TechnologyLinks;
use crate::models::sow_requirement::{
    CreateSowRequirement, SowRequirement, SowRequirementResponse, UpdateSowRequirement,
};

const COLUMNS: &str = "id, sow_id, designation_id, team_size, \
    is_active, created_by, created_at, updated_by, updated_at";

const LINKS: TechnologyLinks = TechnologyLinks {
    table: "sow_requirement_technologies",
    owner_column: "sow_requirement_id",
};

fn view_select() -> String {
    format!(
        "SELECT r.id, s.title AS sow, d.name AS designation, r.team_size, \
            {techs} AS technologies, r.is_active, r.created_by, r.created_at, \
            r.updated_by, r.updated_at \
         FROM sow_requirements r \
         JOIN sows s ON s.id = r.sow_id \
         LEFT JOIN designations d ON d.id = r.designation_id",
        techs = LINKS.names_expr("r.id"),
    )
}

/// Provides CRUD operations for SOW requirements.
pub struct SowRequirementRepo;

impl SowRequirementRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateSowRequirement,
        actor: &str,
    ) -> Result<SowRequirement, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO sow_requirements (sow_id, designation_id, team_size, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let requirement = sqlx::query_as::<_, SowRequirement>(&query)
            .bind(input.sow_id)
            .bind(input.designation_id)
            .bind(input.team_size)
            .bind(actor)
            .fetch_one(&mut *tx)
            .await?;

        if !input.technology_ids.is_empty() {
            LINKS
                .replace(&mut *tx, requirement.id, &input.technology_ids)
                .await?;
        }

        tx.commit().await?;
        Ok(requirement)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SowRequirement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sow_requirements WHERE id = $1");
        sqlx::query_as::<_, SowRequirement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SowRequirementResponse>, sqlx::Error> {
        let query = format!("{} WHERE r.id = $1", view_select());
        sqlx::query_as::<_, SowRequirementResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requirements grouped by SOW, optionally including inactive ones.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<SowRequirementResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!("{} ORDER BY r.sow_id, r.id", view_select())
        } else {
            format!(
                "{} WHERE r.is_active = true ORDER BY r.sow_id, r.id",
                view_select()
            )
        };
        sqlx::query_as::<_, SowRequirementResponse>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSowRequirement,
        actor: &str,
    ) -> Result<Option<SowRequirement>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE sow_requirements SET
                sow_id = COALESCE($2, sow_id),
                designation_id = COALESCE($3, designation_id),
                team_size = COALESCE($4, team_size),
                is_active = COALESCE($5, is_active),
                updated_by = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let requirement = sqlx::query_as::<_, SowRequirement>(&query)
            .bind(id)
            .bind(input.sow_id)
            .bind(input.designation_id)
            .bind(input.team_size)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(&mut *tx)
            .await?;

        if let (Some(requirement), Some(technology_ids)) = (&requirement, &input.technology_ids) {
            LINKS
                .replace(&mut *tx, requirement.id, technology_ids)
                .await?;
        }

        tx.commit().await?;
        Ok(requirement)
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sow_requirements SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
