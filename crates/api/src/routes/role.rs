//! Route definitions for the read-only `/roles` lookup.

use axum::routing::get;
use axum::Router;

use crate::handlers::role;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(role::list))
}
