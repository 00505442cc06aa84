//! Aggregate queries powering the statistics and overview endpoints.

use givehub_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Read-only aggregations over the `donations` and `projects` tables.
pub struct StatsRepo;

impl StatsRepo {
    /// Site-wide donation totals: sum, count, distinct donors, average.
    pub async fn overall(pool: &PgPool) -> Result<DonationTotals, sqlx::Error> {
        let query = "\
            SELECT \
                COALESCE(SUM(amount), 0) AS total_amount, \
                COUNT(*)::BIGINT AS donation_count, \
                COUNT(DISTINCT email)::BIGINT AS distinct_donors, \
                COALESCE(AVG(amount), 0) AS average_amount \
            FROM donations";
        sqlx::query_as::<_, DonationTotals>(query)
            .fetch_one(pool)
            .await
    }

    /// Sum of every donation ever recorded. Zero when none exist.
    pub async fn total_donated(pool: &PgPool) -> Result<Decimal, sqlx::Error> {
        sqlx::query_scalar::<_, Decimal>("SELECT COALESCE(SUM(amount), 0) FROM donations")
            .fetch_one(pool)
            .await
    }

    /// Donation totals bucketed by calendar month (`YYYY-MM`), oldest first.
    pub async fn monthly(pool: &PgPool) -> Result<Vec<MonthlyTotal>, sqlx::Error> {
        let query = "\
            SELECT \
                to_char(created_at, 'YYYY-MM') AS month, \
                COALESCE(SUM(amount), 0) AS total_amount, \
                COUNT(*)::BIGINT AS donation_count \
            FROM donations \
            GROUP BY month \
            ORDER BY month";
        sqlx::query_as::<_, MonthlyTotal>(query).fetch_all(pool).await
    }

    /// Donation totals for everything recorded at or after `cutoff`.
    pub async fn since(pool: &PgPool, cutoff: Timestamp) -> Result<WindowTotals, sqlx::Error> {
        let query = "\
            SELECT \
                COALESCE(SUM(amount), 0) AS total_amount, \
                COUNT(*)::BIGINT AS donation_count \
            FROM donations \
            WHERE created_at >= $1";
        sqlx::query_as::<_, WindowTotals>(query)
            .bind(cutoff)
            .fetch_one(pool)
            .await
    }

    /// Largest named donors by lifetime total. Anonymous donations are
    /// excluded entirely. Donors are keyed by (name, email) so two people
    /// who share a name stay separate, but the email itself is not returned.
    pub async fn top_donors(pool: &PgPool, limit: i64) -> Result<Vec<TopDonor>, sqlx::Error> {
        let query = "\
            SELECT \
                donor_name, \
                SUM(amount) AS total_donated, \
                COUNT(*)::BIGINT AS donation_count, \
                AVG(amount) AS average_amount \
            FROM donations \
            WHERE is_anonymous = FALSE \
            GROUP BY donor_name, email \
            ORDER BY total_donated DESC \
            LIMIT $1";
        sqlx::query_as::<_, TopDonor>(query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Funding figures for every project, best-funded first, with donation
    /// counts and summed donation totals.
    pub async fn project_funding(pool: &PgPool) -> Result<Vec<ProjectFunding>, sqlx::Error> {
        let query = "\
            SELECT \
                p.id, p.name, p.target_amount, p.current_amount, p.status, \
                COUNT(d.id)::BIGINT AS donation_count, \
                COALESCE(SUM(d.amount), 0) AS total_donated \
            FROM projects p \
            LEFT JOIN donations d ON d.project_id = p.id \
            GROUP BY p.id \
            ORDER BY p.current_amount DESC, p.id DESC";
        sqlx::query_as::<_, ProjectFunding>(query).fetch_all(pool).await
    }
}

// ---------------------------------------------------------------------------
// Aggregate row types
// ---------------------------------------------------------------------------

/// Site-wide donation totals.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct DonationTotals {
    pub total_amount: Decimal,
    pub donation_count: i64,
    pub distinct_donors: i64,
    pub average_amount: Decimal,
}

/// Donation totals for one calendar month.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub total_amount: Decimal,
    pub donation_count: i64,
}

/// Donation totals within a time window.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct WindowTotals {
    pub total_amount: Decimal,
    pub donation_count: i64,
}

/// Lifetime giving for one named donor.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct TopDonor {
    pub donor_name: String,
    pub total_donated: Decimal,
    pub donation_count: i64,
    pub average_amount: Decimal,
}

/// Funding figures for one project.
#[derive(Debug, Clone, sqlx::FromRow, serde::Serialize)]
pub struct ProjectFunding {
    pub id: DbId,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub status: String,
    pub donation_count: i64,
    pub total_donated: Decimal,
}
