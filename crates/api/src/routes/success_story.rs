//! Route definitions for the `/success-stories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::success_story;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(success_story::list).post(success_story::create))
        .route(
            "/{id}",
            get(success_story::get_by_id)
                .put(success_story::update)
                .patch(success_story::deactivate),
        )
}
