//! Handlers for the `/lead-enquiries` resource: inbound sales leads.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use talentdesk_core::error::CoreError;
use talentdesk_core::lifecycle;
use talentdesk_core::types::{Date, DbId};
use talentdesk_core::validation::validate_not_blank;
use talentdesk_db::models::lead_enquiry::{
    CreateLeadEnquiry, LeadEnquiryResponse, UpdateLeadEnquiry,
};
use talentdesk_db::repositories::LeadEnquiryRepo;
use validator::Validate;

use super::references;
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::{RequireAdmin, RequireAuth, RequireLead, RequireManager};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Lead enquiry";

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLeadEnquiryRequest {
    #[serde(deserialize_with = "crate::extract::trimmed")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub company_name: String,
    pub company_representative: Option<String>,
    pub representative_designation: Option<String>,
    pub requirement: Option<String>,
    pub enquiry_date: Option<Date>,
    pub raised_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLeadEnquiryRequest {
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "crate::extract::trimmed_opt")]
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub company_name: Option<String>,
    pub company_representative: Option<String>,
    pub representative_designation: Option<String>,
    pub requirement: Option<String>,
    pub enquiry_date: Option<Date>,
    pub raised_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

async fn load_view(state: &AppState, id: DbId) -> AppResult<LeadEnquiryResponse> {
    LeadEnquiryRepo::find_response_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/lead-enquiries
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<LeadEnquiryResponse>>>> {
    let items =
        LeadEnquiryRepo::list(&state.pool, lifecycle::include_inactive(&user.role)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/lead-enquiries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<LeadEnquiryResponse>>> {
    let enquiry = load_view(&state, id).await?;
    lifecycle::ensure_visible(&user.role, enquiry.is_active, ENTITY, id)?;
    Ok(Json(DataResponse { data: enquiry }))
}

/// POST /api/lead-enquiries
pub async fn create(
    State(state): State<AppState>,
    RequireManager(user): RequireManager,
    ValidatedJson(input): ValidatedJson<CreateLeadEnquiryRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<LeadEnquiryResponse>>)> {
    let pool = &state.pool;
    let raised_by_id =
        references::optional(input.raised_by.as_deref(), |n| references::employee_id(pool, n))
            .await?;
    let assigned_to_id = references::optional(input.assigned_to.as_deref(), |n| {
        references::employee_id(pool, n)
    })
    .await?;
    let technology_ids = references::technology_ids(pool, &input.technologies).await?;

    let dto = CreateLeadEnquiry {
        company_name: input.company_name,
        company_representative: input.company_representative,
        representative_designation: input.representative_designation,
        requirement: input.requirement,
        enquiry_date: input.enquiry_date,
        raised_by_id,
        assigned_to_id,
        status: input.status,
        comments: input.comments,
        technology_ids,
    };
    let enquiry = LeadEnquiryRepo::create(pool, &dto, &user.name).await?;

    tracing::info!(
        lead_enquiry_id = enquiry.id,
        company = %enquiry.company_name,
        actor = %user.name,
        "Lead enquiry created",
    );
    let view = load_view(&state, enquiry.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/lead-enquiries/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireLead(user): RequireLead,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateLeadEnquiryRequest>,
) -> AppResult<Json<DataResponse<LeadEnquiryResponse>>> {
    lifecycle::ensure_id_matches(id, input.id)?;
    let pool = &state.pool;
    let existing = LeadEnquiryRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    lifecycle::ensure_reactivation_allowed(
        &user.role,
        existing.is_active,
        input.is_active,
        ENTITY,
        id,
    )?;

    let raised_by_id =
        references::optional(input.raised_by.as_deref(), |n| references::employee_id(pool, n))
            .await?;
    let assigned_to_id = references::optional(input.assigned_to.as_deref(), |n| {
        references::employee_id(pool, n)
    })
    .await?;
    let technology_ids =
        references::optional_technology_ids(pool, input.technologies.as_deref()).await?;

    let dto = UpdateLeadEnquiry {
        company_name: input.company_name,
        company_representative: input.company_representative,
        representative_designation: input.representative_designation,
        requirement: input.requirement,
        enquiry_date: input.enquiry_date,
        raised_by_id,
        assigned_to_id,
        status: input.status,
        comments: input.comments,
        technology_ids,
        is_active: input.is_active,
    };
    LeadEnquiryRepo::update(pool, id, &dto, &user.name)
        .await?
        .ok_or_else(|| not_found(id))?;

    if lifecycle::is_reactivation(existing.is_active, input.is_active) {
        tracing::info!(lead_enquiry_id = id, actor = %user.name, "Lead enquiry reactivated");
    }
    Ok(Json(DataResponse {
        data: load_view(&state, id).await?,
    }))
}

/// PATCH /api/lead-enquiries/{id}
pub async fn deactivate(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !LeadEnquiryRepo::deactivate(&state.pool, id, &user.name).await? {
        return Err(not_found(id));
    }
    tracing::info!(lead_enquiry_id = id, actor = %user.name, "Lead enquiry deactivated");
    Ok(StatusCode::NO_CONTENT)
}
