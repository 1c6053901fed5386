//! Route definitions for the `/designations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::designation;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(designation::list).post(designation::create))
        .route(
            "/{id}",
            get(designation::get_by_id)
                .put(designation::update)
                .patch(designation::deactivate),
        )
}
