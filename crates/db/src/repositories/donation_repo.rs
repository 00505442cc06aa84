//! Repository for the `donations` table.

use givehub_core::pagination::{clamp_limit, clamp_offset};
use givehub_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::donation::{
    Donation, DonationListParams, DonationWithProject, NewDonation, UpdateDonation,
};
use crate::repositories::ProjectRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, donor_name, amount, email, created_at, is_anonymous";

/// Column list for queries joined with `projects`.
const JOINED_COLUMNS: &str = "d.id, d.project_id, p.name AS project_name, d.donor_name, \
                              d.amount, d.email, d.created_at, d.is_anonymous";

/// Provides CRUD operations for donations.
pub struct DonationRepo;

impl DonationRepo {
    /// Record a donation and refresh the project's collected total.
    ///
    /// Runs as three separate statements, not a transaction: the insert,
    /// a full re-sum of the project's donations, and the project save.
    /// Concurrent donations may interleave; the stored total is restored
    /// by the next full re-sum.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &NewDonation,
    ) -> Result<Donation, sqlx::Error> {
        let query = format!(
            "INSERT INTO donations (project_id, donor_name, amount, email, is_anonymous) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let donation = sqlx::query_as::<_, Donation>(&query)
            .bind(project_id)
            .bind(&input.donor_name)
            .bind(input.amount)
            .bind(&input.email)
            .bind(input.is_anonymous)
            .fetch_one(pool)
            .await?;

        let total = Self::sum_for_project(pool, project_id).await?;
        if ProjectRepo::save_collected(pool, project_id, total)
            .await?
            .is_none()
        {
            tracing::warn!(project_id, "project vanished while refreshing collected total");
        }

        Ok(donation)
    }

    /// Sum of all donation amounts for a project. Zero when none exist.
    pub async fn sum_for_project(pool: &PgPool, project_id: DbId) -> Result<Decimal, sqlx::Error> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(amount), 0) FROM donations WHERE project_id = $1",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await
    }

    /// Find a donation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Donation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donations WHERE id = $1");
        sqlx::query_as::<_, Donation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's donations, newest first.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Donation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM donations WHERE project_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(project_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Most recent donations across all projects, joined with project names.
    pub async fn list_recent_with_project(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<DonationWithProject>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM donations d \
             JOIN projects p ON p.id = d.project_id \
             ORDER BY d.created_at DESC, d.id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, DonationWithProject>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Search donations with optional filters and pagination.
    pub async fn list(
        pool: &PgPool,
        params: &DonationListParams,
    ) -> Result<Vec<DonationWithProject>, sqlx::Error> {
        let limit = clamp_limit(params.limit);
        let offset = clamp_offset(params.offset);

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.project_id.is_some() {
            conditions.push(format!("d.project_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.is_anonymous.is_some() {
            conditions.push(format!("d.is_anonymous = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.q.is_some() {
            conditions.push(format!(
                "(d.donor_name ILIKE ${bind_idx} OR d.email ILIKE ${bind_idx} \
                  OR p.name ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM donations d \
             JOIN projects p ON p.id = d.project_id \
             {where_clause} \
             ORDER BY d.created_at DESC, d.id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, DonationWithProject>(&query);

        // Bind dynamic parameters in order.
        if let Some(project_id) = params.project_id {
            q = q.bind(project_id);
        }
        if let Some(is_anonymous) = params.is_anonymous {
            q = q.bind(is_anonymous);
        }
        if let Some(ref term) = params.q {
            q = q.bind(format!("%{term}%"));
        }

        q = q.bind(limit).bind(offset);
        q.fetch_all(pool).await
    }

    /// Count donations matching the same filters as [`Self::list`].
    pub async fn count(pool: &PgPool, params: &DonationListParams) -> Result<i64, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.project_id.is_some() {
            conditions.push(format!("d.project_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.is_anonymous.is_some() {
            conditions.push(format!("d.is_anonymous = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.q.is_some() {
            conditions.push(format!(
                "(d.donor_name ILIKE ${bind_idx} OR d.email ILIKE ${bind_idx} \
                  OR p.name ILIKE ${bind_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT COUNT(*) \
             FROM donations d \
             JOIN projects p ON p.id = d.project_id \
             {where_clause}"
        );

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(project_id) = params.project_id {
            q = q.bind(project_id);
        }
        if let Some(is_anonymous) = params.is_anonymous {
            q = q.bind(is_anonymous);
        }
        if let Some(ref term) = params.q {
            q = q.bind(format!("%{term}%"));
        }
        q.fetch_one(pool).await
    }

    /// Correct a donation record. Only non-`None` fields in `input` are
    /// applied. Does not refresh any project's collected total.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDonation,
    ) -> Result<Option<Donation>, sqlx::Error> {
        let query = format!(
            "UPDATE donations SET \
                project_id = COALESCE($2, project_id), \
                donor_name = COALESCE($3, donor_name), \
                email = COALESCE($4, email), \
                amount = COALESCE($5, amount), \
                is_anonymous = COALESCE($6, is_anonymous) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(id)
            .bind(input.project_id)
            .bind(input.donor_name.as_deref())
            .bind(input.email.as_deref())
            .bind(input.amount)
            .bind(input.is_anonymous)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a donation by ID. Returns `true` if a row was
    /// removed. Does not refresh the project's collected total.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM donations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
