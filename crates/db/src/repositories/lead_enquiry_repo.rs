//! Repository for the `lead_enquiries` table and its technology links.

use sqlx::PgPool;
use talentdesk_core::types::DbId;

use super::technology_links::TechnologyLinks;
use crate::models::lead_enquiry::{
    CreateLeadEnquiry, LeadEnquiry, LeadEnquiryResponse, UpdateLeadEnquiry,
};

const COLUMNS: &str = "id, company_name, company_representative, \
    representative_designation, requirement, enquiry_date, raised_by_id, \
    assigned_to_id, status, comments, is_active, created_by, created_at, \
    updated_by, updated_at";

const LINKS: TechnologyLinks = TechnologyLinks {
    table: "lead_enquiry_technologies",
    owner_column: "lead_enquiry_id",
};

fn view_select() -> String {
    format!(
        "SELECT l.id, l.company_name, l.company_representative, \
            l.representative_designation, l.requirement, l.enquiry_date, \
            rb.name AS raised_by, asg.name AS assigned_to, l.status, l.comments, \
            {techs} AS technologies, l.is_active, l.created_by, l.created_at, \
            l.updated_by, l.updated_at \
         FROM lead_enquiries l \
         LEFT JOIN employees rb ON rb.id = l.raised_by_id \
         LEFT JOIN employees asg ON asg.id = l.assigned_to_id",
        techs = LINKS.names_expr("l.id"),
    )
}

/// Provides CRUD operations for lead enquiries.
pub struct LeadEnquiryRepo;

impl LeadEnquiryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateLeadEnquiry,
        actor: &str,
    ) -> Result<LeadEnquiry, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO lead_enquiries
                (company_name, company_representative, representative_designation,
                 requirement, enquiry_date, raised_by_id, assigned_to_id, status,
                 comments, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let enquiry = sqlx::query_as::<_, LeadEnquiry>(&query)
            .bind(&input.company_name)
            .bind(&input.company_representative)
            .bind(&input.representative_designation)
            .bind(&input.requirement)
            .bind(input.enquiry_date)
            .bind(input.raised_by_id)
            .bind(input.assigned_to_id)
            .bind(&input.status)
            .bind(&input.comments)
            .bind(actor)
            .fetch_one(&mut *tx)
            .await?;

        if !input.technology_ids.is_empty() {
            LINKS
                .replace(&mut *tx, enquiry.id, &input.technology_ids)
                .await?;
        }

        tx.commit().await?;
        Ok(enquiry)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LeadEnquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lead_enquiries WHERE id = $1");
        sqlx::query_as::<_, LeadEnquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LeadEnquiryResponse>, sqlx::Error> {
        let query = format!("{} WHERE l.id = $1", view_select());
        sqlx::query_as::<_, LeadEnquiryResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List enquiries, most recent first.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<LeadEnquiryResponse>, sqlx::Error> {
        let query = if include_inactive {
            format!(
                "{} ORDER BY l.enquiry_date DESC NULLS LAST, l.id DESC",
                view_select()
            )
        } else {
            format!(
                "{} WHERE l.is_active = true ORDER BY l.enquiry_date DESC NULLS LAST, l.id DESC",
                view_select()
            )
        };
        sqlx::query_as::<_, LeadEnquiryResponse>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLeadEnquiry,
        actor: &str,
    ) -> Result<Option<LeadEnquiry>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE lead_enquiries SET
                company_name = COALESCE($2, company_name),
                company_representative = COALESCE($3, company_representative),
                representative_designation = COALESCE($4, representative_designation),
                requirement = COALESCE($5, requirement),
                enquiry_date = COALESCE($6, enquiry_date),
                raised_by_id = COALESCE($7, raised_by_id),
                assigned_to_id = COALESCE($8, assigned_to_id),
                status = COALESCE($9, status),
                comments = COALESCE($10, comments),
                is_active = COALESCE($11, is_active),
                updated_by = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let enquiry = sqlx::query_as::<_, LeadEnquiry>(&query)
            .bind(id)
            .bind(&input.company_name)
            .bind(&input.company_representative)
            .bind(&input.representative_designation)
            .bind(&input.requirement)
            .bind(input.enquiry_date)
            .bind(input.raised_by_id)
            .bind(input.assigned_to_id)
            .bind(&input.status)
            .bind(&input.comments)
            .bind(input.is_active)
            .bind(actor)
            .fetch_optional(&mut *tx)
            .await?;

        if let (Some(enquiry), Some(technology_ids)) = (&enquiry, &input.technology_ids) {
            LINKS.replace(&mut *tx, enquiry.id, technology_ids).await?;
        }

        tx.commit().await?;
        Ok(enquiry)
    }

    pub async fn deactivate(pool: &PgPool, id: DbId, actor: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE lead_enquiries SET is_active = false, updated_by = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
