//! Route definitions for the `/sow-requirements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sow_requirement;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sow_requirement::list).post(sow_requirement::create))
        .route(
            "/{id}",
            get(sow_requirement::get_by_id)
                .put(sow_requirement::update)
                .patch(sow_requirement::deactivate),
        )
}
