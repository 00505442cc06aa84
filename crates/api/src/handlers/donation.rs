//! Handlers for the public donation surface.
//!
//! Visitors may list a project's donations and submit new ones. Staff
//! corrections live in [`crate::handlers::admin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use givehub_core::donation;
use givehub_core::error::CoreError;
use givehub_core::types::{DbId, Timestamp};
use givehub_db::models::donation::{Donation, DonationWithProject, NewDonation};
use givehub_db::repositories::{DonationRepo, ProjectRepo};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Donations returned per project when no explicit limit is given.
const DEFAULT_RECENT: i64 = 10;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A donation as shown to visitors.
///
/// Anonymous donations carry "Anonymous" as the donor name, and the
/// donor's email never appears in public payloads.
#[derive(Debug, Serialize)]
pub struct PublicDonation {
    pub id: DbId,
    pub project_id: DbId,
    pub donor_name: String,
    pub amount: Decimal,
    pub created_at: Timestamp,
    pub is_anonymous: bool,
}

impl From<Donation> for PublicDonation {
    fn from(donation: Donation) -> Self {
        Self {
            donor_name: mask_donor(donation.donor_name, donation.is_anonymous),
            id: donation.id,
            project_id: donation.project_id,
            amount: donation.amount,
            created_at: donation.created_at,
            is_anonymous: donation.is_anonymous,
        }
    }
}

/// A public donation together with the name of the project it funds.
#[derive(Debug, Serialize)]
pub struct RecentDonation {
    pub id: DbId,
    pub project_id: DbId,
    pub project_name: String,
    pub donor_name: String,
    pub amount: Decimal,
    pub created_at: Timestamp,
    pub is_anonymous: bool,
}

impl From<DonationWithProject> for RecentDonation {
    fn from(donation: DonationWithProject) -> Self {
        Self {
            donor_name: mask_donor(donation.donor_name, donation.is_anonymous),
            id: donation.id,
            project_id: donation.project_id,
            project_name: donation.project_name,
            amount: donation.amount,
            created_at: donation.created_at,
            is_anonymous: donation.is_anonymous,
        }
    }
}

/// Payload returned after a successful donation.
#[derive(Debug, Serialize)]
pub struct DonationReceipt {
    pub message: String,
    pub donation: PublicDonation,
}

fn mask_donor(donor_name: String, is_anonymous: bool) -> String {
    if is_anonymous {
        "Anonymous".to_string()
    } else {
        donor_name
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/projects/{project_id}/donations?limit=&offset=
///
/// Recent donations for one project, newest first. Defaults to ten.
pub async fn list_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<PublicDonation>>>> {
    if ProjectRepo::find_by_id(&state.pool, project_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }));
    }

    let limit = params.limit.unwrap_or(DEFAULT_RECENT);
    let donations =
        DonationRepo::list_for_project(&state.pool, project_id, Some(limit), params.offset)
            .await?;
    Ok(Json(DataResponse {
        data: donations.into_iter().map(PublicDonation::from).collect(),
    }))
}

/// POST /api/v1/projects/{project_id}/donations
///
/// Record a donation against a project that is accepting them.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<NewDonation>,
) -> AppResult<(StatusCode, Json<DataResponse<DonationReceipt>>)> {
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    if !project.is_active(chrono::Utc::now()) {
        return Err(AppError::ProjectInactive);
    }

    donation::validate_new(&input.donor_name, &input.email, input.amount)?;

    let donation = DonationRepo::create(&state.pool, project_id, &input).await?;
    tracing::info!(
        donation_id = donation.id,
        project_id,
        amount = %donation.amount,
        "Donation recorded"
    );

    let message = format!("Thank you for your donation of {}!", donation.amount);
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: DonationReceipt {
                message,
                donation: donation.into(),
            },
        }),
    ))
}
