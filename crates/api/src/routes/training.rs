//! Route definitions for the `/trainings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::training;
use crate::state::AppState;

/// Routes mounted at `/trainings`.
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
        .route("/", get(training::list).post(training::create))
        .route(
            "/{id}",
            get(training::get_by_id)
                .put(training::update)
                .patch(training::deactivate),
        )
}
