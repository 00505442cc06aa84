//! Handler for the site-wide statistics payload.

use axum::extract::State;
use axum::Json;
use chrono::Duration;
use givehub_core::ledger;
use givehub_core::types::DbId;
use givehub_db::repositories::stats_repo::MonthlyTotal;
use givehub_db::repositories::StatsRepo;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Width of the recent-activity window, in days.
const RECENT_WINDOW_DAYS: i64 = 30;

/// Donors shown in the leaderboard.
const TOP_DONORS: i64 = 10;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Funding figures for one project, with derived progress.
#[derive(Debug, Serialize)]
pub struct ProjectFundingView {
    pub id: DbId,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub progress_percentage: f64,
    pub status: String,
    pub donation_count: i64,
    pub total_donated: Decimal,
}

/// One leaderboard row.
#[derive(Debug, Serialize)]
pub struct TopDonorView {
    pub donor_name: String,
    pub total_donated: Decimal,
    pub donation_count: i64,
    pub average_donation: Decimal,
}

/// The full statistics payload.
#[derive(Debug, Serialize)]
pub struct StatsPayload {
    /// Sum of every donation ever recorded.
    pub total_donations: Decimal,
    pub donation_count: i64,
    /// Distinct donors, keyed by email.
    pub total_donors: i64,
    /// Average donation, rounded to two decimals.
    pub avg_donation: Decimal,
    /// Per-project funding, best-funded first.
    pub projects: Vec<ProjectFundingView>,
    /// Per-calendar-month totals, oldest first.
    pub monthly: Vec<MonthlyTotal>,
    /// Total donated within the trailing window.
    pub recent_total: Decimal,
    /// Donations recorded within the trailing window.
    pub recent_count: i64,
    pub top_donors: Vec<TopDonorView>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// GET /api/v1/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<StatsPayload>>> {
    let overall = StatsRepo::overall(&state.pool).await?;

    let projects = StatsRepo::project_funding(&state.pool)
        .await?
        .into_iter()
        .map(|funding| ProjectFundingView {
            progress_percentage: ledger::progress_percentage(
                funding.current_amount,
                funding.target_amount,
            ),
            id: funding.id,
            name: funding.name,
            target_amount: funding.target_amount,
            current_amount: funding.current_amount,
            status: funding.status,
            donation_count: funding.donation_count,
            total_donated: funding.total_donated,
        })
        .collect();

    let monthly = StatsRepo::monthly(&state.pool).await?;

    let cutoff = chrono::Utc::now() - Duration::days(RECENT_WINDOW_DAYS);
    let window = StatsRepo::since(&state.pool, cutoff).await?;

    let top_donors = StatsRepo::top_donors(&state.pool, TOP_DONORS)
        .await?
        .into_iter()
        .map(|donor| TopDonorView {
            average_donation: donor.average_amount.round_dp(2),
            donor_name: donor.donor_name,
            total_donated: donor.total_donated,
            donation_count: donor.donation_count,
        })
        .collect();

    Ok(Json(DataResponse {
        data: StatsPayload {
            total_donations: overall.total_amount,
            donation_count: overall.donation_count,
            total_donors: overall.distinct_donors,
            avg_donation: overall.average_amount.round_dp(2),
            projects,
            monthly,
            recent_total: window.total_amount,
            recent_count: window.donation_count,
            top_donors,
        },
    }))
}
