pub mod admin;
pub mod health;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /overview                                home-page aggregate payload (GET)
/// /stats                                   site-wide statistics (GET)
///
/// /projects                                list (GET)
/// /projects/{id}                           detail with recent donations (GET)
/// /projects/{project_id}/donations         list (GET), submit (POST)
///
/// /admin/projects                          list, create
/// /admin/projects/form-config              form field layout (?mode=add|edit)
/// /admin/projects/{id}                     get, update, delete
/// /admin/donations                         list (filters + pagination)
/// /admin/donations/{id}                    get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Home-page aggregate payload.
        .route("/overview", get(handlers::overview::overview))
        // Site-wide statistics.
        .route("/stats", get(handlers::stats::stats))
        // Public project browsing (also nests public donation routes).
        .nest("/projects", project::router())
        // Staff console.
        .nest("/admin", admin::router())
}
