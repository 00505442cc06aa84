//! Route definitions for the public `/projects` resource.
//!
//! Also nests the public donation routes under
//! `/projects/{project_id}/donations`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{donation, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET  /                            -> list
/// GET  /{id}                        -> get_by_id
/// GET  /{project_id}/donations      -> list_for_project
/// POST /{project_id}/donations      -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/{id}", get(project::get_by_id))
        .route(
            "/{project_id}/donations",
            get(donation::list_for_project).post(donation::create),
        )
}
