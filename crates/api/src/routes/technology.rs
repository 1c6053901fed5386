//! Route definitions for the `/technologies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::technology;
use crate::state::AppState;

/// Routes mounted at `/technologies`.
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
        .route("/", get(technology::list).post(technology::create))
        .route(
            "/{id}",
            get(technology::get_by_id)
                .put(technology::update)
                .patch(technology::deactivate),
        )
}
