//! Route definitions for the `/lead-enquiries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::lead_enquiry;
use crate::state::AppState;

/// Routes mounted at `/lead-enquiries`.
///
/// ```text
/// GET   /      -> list
/// POST  /      -> create
/// GET   /{id}  -> get_by_id
/// PUT   /{id}  -> update
/// PATCH /{id}  -> deactivate (soft delete)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lead_enquiry::list).post(lead_enquiry::create))
        .route(
            "/{id}",
            get(lead_enquiry::get_by_id)
                .put(lead_enquiry::update)
                .patch(lead_enquiry::deactivate),
        )
}
