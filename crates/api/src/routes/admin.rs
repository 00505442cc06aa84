//! Route definitions for the staff console.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /projects                  -> list_projects
/// POST   /projects                  -> create_project
/// GET    /projects/form-config      -> project_form_config
/// GET    /projects/{id}             -> get_project
/// PUT    /projects/{id}             -> update_project
/// DELETE /projects/{id}             -> delete_project
///
/// GET    /donations                 -> list_donations
/// GET    /donations/{id}            -> get_donation
/// PUT    /donations/{id}            -> update_donation
/// DELETE /donations/{id}            -> delete_donation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(admin::list_projects).post(admin::create_project),
        )
        .route("/projects/form-config", get(admin::project_form_config))
        .route(
            "/projects/{id}",
            get(admin::get_project)
                .put(admin::update_project)
                .delete(admin::delete_project),
        )
        .route("/donations", get(admin::list_donations))
        .route(
            "/donations/{id}",
            get(admin::get_donation)
                .put(admin::update_donation)
                .delete(admin::delete_donation),
        )
}
