//! Route definitions for the `/best-performers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::best_performer;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(best_performer::list).post(best_performer::create))
        .route(
            "/{id}",
            get(best_performer::get_by_id)
                .put(best_performer::update)
                .patch(best_performer::deactivate),
        )
}
