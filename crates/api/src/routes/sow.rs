//! Route definitions for the `/sows` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sow;
use crate::state::AppState;

/// Routes mounted at `/sows`.
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
        .route("/", get(sow::list).post(sow::create))
        .route(
            "/{id}",
            get(sow::get_by_id)
                .put(sow::update)
                .patch(sow::deactivate),
        )
}
