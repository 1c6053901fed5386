//! Client entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use talentdesk_core::types::{DbId, Timestamp};

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub line_of_business: Option<String>,
    pub country: Option<String>,
    pub sales_employee_id: Option<DbId>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

/// Read view with the sales contact's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClientResponse {
    pub id: DbId,
    pub name: String,
    pub line_of_business: Option<String>,
    pub country: Option<String>,
    pub sales_employee: Option<String>,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_by: Option<String>,
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone)]
pub struct CreateClient {
    pub name: String,
    pub line_of_business: Option<String>,
    pub country: Option<String>,
    pub sales_employee_id: Option<DbId>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub line_of_business: Option<String>,
    pub country: Option<String>,
    pub sales_employee_id: Option<DbId>,
    pub is_active: Option<bool>,
}
