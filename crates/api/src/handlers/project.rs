//! Handlers for the public `/projects` resource.

use axum::extract::{Path, State};
use axum::Json;
use givehub_core::error::CoreError;
use givehub_core::types::{DbId, Timestamp};
use givehub_db::models::project::Project;
use givehub_db::repositories::{DonationRepo, ProjectRepo};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::donation::PublicDonation;
use crate::response::DataResponse;
use crate::state::AppState;

/// Donations shown on a project's detail payload.
const DETAIL_DONATIONS: i64 = 10;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A project with its derived display fields, evaluated at response time.
#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub progress_percentage: f64,
    pub days_remaining: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub deadline: Option<Timestamp>,
    pub status: String,
    pub image_url: Option<String>,
}

impl ProjectView {
    /// Project a stored row into its display form as of `now`.
    pub fn from_project(project: Project, now: Timestamp) -> Self {
        Self {
            progress_percentage: project.progress_percentage(),
            days_remaining: project.days_remaining(now),
            is_active: project.is_active(now),
            id: project.id,
            name: project.name,
            description: project.description,
            target_amount: project.target_amount,
            current_amount: project.current_amount,
            created_at: project.created_at,
            deadline: project.deadline,
            status: project.status,
            image_url: project.image_url,
        }
    }
}

/// Detail payload for one project.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    pub project: ProjectView,
    pub recent_donations: Vec<PublicDonation>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects
///
/// Every project, newest first.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectView>>>> {
    let projects = ProjectRepo::list_all(&state.pool).await?;
    let now = chrono::Utc::now();
    let views = projects
        .into_iter()
        .map(|project| ProjectView::from_project(project, now))
        .collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/projects/{id}
///
/// One project together with its ten most recent donations.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let donations =
        DonationRepo::list_for_project(&state.pool, id, Some(DETAIL_DONATIONS), None).await?;

    let now = chrono::Utc::now();
    Ok(Json(DataResponse {
        data: ProjectDetail {
            project: ProjectView::from_project(project, now),
            recent_donations: donations.into_iter().map(PublicDonation::from).collect(),
        },
    }))
}
