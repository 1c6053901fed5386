//! Lead enquiry entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Date, Timestamp};

/// A row from the `lead_enquiries` table.
#[derive(Debug, Clone, FromRow)]
pub struct LeadEnquiry {
    pub id: DbId,
    pub company_name: String,
    pub company_representative: Option<String>,
    pub representative_designation: Option<String>,
    pub requirement: Option<String>,
    pub enquiry_date: Option<Date>,
    pub raised_by_id: Option<DbId>,
    pub assigned_to_id: Option<DbId>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeadEnquiryResponse {
    pub id: DbId,
    pub company_name: String,
    pub company_representative: Option<String>,
    pub representative_designation: Option<String>,
    pub requirement: Option<String>,
    pub enquiry_date: Option<Date>,
    pub raised_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub technologies: Vec<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateLeadEnquiry {
    pub company_name: String,
    pub company_representative: Option<String>,
    pub representative_designation: Option<String>,
    pub requirement: Option<String>,
    pub enquiry_date: Option<Date>,
    pub raised_by_id: Option<DbId>,
    pub assigned_to_id: Option<DbId>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub technology_ids: Vec<DbId>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLeadEnquiry {
    pub company_name: Option<String>,
    pub company_representative: Option<String>,
    pub representative_designation: Option<String>,
    pub requirement: Option<String>,
    pub enquiry_date: Option<Date>,
    pub raised_by_id: Option<DbId>,
    pub assigned_to_id: Option<DbId>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub technology_ids: Option<Vec<DbId>>,
    pub is_active: Option<bool>,
}
