//! Handler for the home-page overview payload.

use axum::extract::State;
use axum::Json;
use givehub_core::project::STATUS_ACTIVE;
use givehub_db::repositories::{DonationRepo, ProjectRepo, StatsRepo};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::donation::RecentDonation;
use crate::handlers::project::ProjectView;
use crate::response::DataResponse;
use crate::state::AppState;

/// Donations shown in the recent-activity strip.
const RECENT_DONATIONS: i64 = 5;

/// Newest status-active projects considered for the featured slots.
const FEATURED_POOL: usize = 6;

/// Featured projects shown at most.
const FEATURED_MAX: usize = 3;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Everything the home page needs in one payload.
#[derive(Debug, Serialize)]
pub struct OverviewPayload {
    /// Sum of every donation ever recorded.
    pub total_donations: Decimal,
    /// Count of all projects regardless of status.
    pub total_projects: i64,
    /// Count of projects whose stored status is `active`.
    pub active_projects: i64,
    /// Count of projects actually accepting donations right now.
    pub actually_active_projects: i64,
    pub recent_donations: Vec<RecentDonation>,
    pub featured_projects: Vec<ProjectView>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// GET /api/v1/overview
pub async fn overview(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<OverviewPayload>>> {
    let now = chrono::Utc::now();

    let total_donations = StatsRepo::total_donated(&state.pool).await?;
    let total_projects = ProjectRepo::count_all(&state.pool).await?;

    let status_active = ProjectRepo::list_by_status(&state.pool, STATUS_ACTIVE).await?;
    let active_projects = status_active.len() as i64;
    let actually_active_projects = status_active
        .iter()
        .filter(|project| project.is_active(now))
        .count() as i64;

    // Featured slots draw from the newest six status-active projects,
    // keeping only those actually accepting donations, capped at three.
    let mut featured_projects = Vec::new();
    for project in status_active.into_iter().take(FEATURED_POOL) {
        if featured_projects.len() == FEATURED_MAX {
            break;
        }
        if project.is_active(now) {
            featured_projects.push(ProjectView::from_project(project, now));
        }
    }

    let recent = DonationRepo::list_recent_with_project(&state.pool, RECENT_DONATIONS).await?;
    let recent_donations = recent.into_iter().map(RecentDonation::from).collect();

    Ok(Json(DataResponse {
        data: OverviewPayload {
            total_donations,
            total_projects,
            active_projects,
            actually_active_projects,
            recent_donations,
            featured_projects,
        },
    }))
}
