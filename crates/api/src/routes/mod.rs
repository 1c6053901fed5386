pub mod auth;
pub mod best_performer;
pub mod blog;
pub mod client;
pub mod department;
pub mod designation;
pub mod employee;
pub mod health;
pub mod lead_enquiry;
pub mod project;
pub mod role;
pub mod sow;
pub mod sow_requirement;
pub mod success_story;
pub mod technology;
pub mod training;
pub mod training_team;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Every resource below follows the same shape (list, create, get, update,
/// soft delete); see the individual route modules.
///
/// ```text
/// /auth/login                  login (public)
/// /auth/me                     current caller
/// /roles                       role lookup (read only)
///
/// /departments                 /designations            /technologies
/// /employees                   /clients                 /projects
/// /sows                        /sow-requirements        /blogs
/// /trainings                   /training-teams          /lead-enquiries
/// /success-stories             /best-performers
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/roles", role::router())
        // Organisation structure.
        .nest("/departments", department::router())
        .nest("/designations", designation::router())
        .nest("/technologies", technology::router())
        .nest("/employees", employee::router())
        // Sales and delivery.
        .nest("/clients", client::router())
        .nest("/projects", project::router())
        .nest("/sows", sow::router())
        .nest("/sow-requirements", sow_requirement::router())
        .nest("/lead-enquiries", lead_enquiry::router())
        .nest("/success-stories", success_story::router())
        // People development.
        .nest("/blogs", blog::router())
        .nest("/trainings", training::router())
        .nest("/training-teams", training_team::router())
        .nest("/best-performers", best_performer::router())
}
