//! Route definitions for the `/blogs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Routes mounted at `/blogs`.
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
        .route("/", get(blog::list).post(blog::create))
        .route(
            "/{id}",
            get(blog::get_by_id)
                .put(blog::update)
                .patch(blog::deactivate),
        )
}
