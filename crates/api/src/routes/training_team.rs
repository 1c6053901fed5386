//! Route definitions for the `/training-teams` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::training_team;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(training_team::list).post(training_team::create))
        .route(
            "/{id}",
            get(training_team::get_by_id)
                .put(training_team::update)
                .patch(training_team::deactivate),
        )
}
