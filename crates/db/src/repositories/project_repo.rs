//! Repository for the `projects` table.

use givehub_core::ledger;
use givehub_core::pagination::{clamp_limit, clamp_offset};
use givehub_core::project::STATUS_ACTIVE;
use givehub_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectListParams, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, target_amount, current_amount, \
                       created_at, deadline, status, image_url";

/// Provides CRUD operations for projects.
///
/// Every write of the financial columns goes through
/// [`ledger::apply_save_rules`], so a stored row never has
/// `current_amount > target_amount` and an active project whose target
/// is reached is flipped to completed.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `active`. A new
    /// project starts with nothing collected; the save rules may still
    /// complete it immediately when the target is zero.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let figures = ledger::apply_save_rules(
            input.target_amount,
            None,
            input.status.as_deref().unwrap_or(STATUS_ACTIVE),
        );
        let query = format!(
            "INSERT INTO projects \
                (name, description, target_amount, current_amount, deadline, status, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(figures.target_amount)
            .bind(figures.current_amount)
            .bind(input.deadline)
            .bind(&figures.status)
            .bind(input.image_url.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All projects, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// All projects with the given status, newest first.
    pub async fn list_by_status(pool: &PgPool, status: &str) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE status = $1 \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Search projects with optional filters and pagination, newest first.
    pub async fn list(
        pool: &PgPool,
        params: &ProjectListParams,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let limit = clamp_limit(params.limit);
        let offset = clamp_offset(params.offset);

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.q.is_some() {
            conditions.push(format!(
                "(name ILIKE ${bind_idx} OR description ILIKE ${bind_idx})"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM projects {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Project>(&query);
        if let Some(ref status) = params.status {
            q = q.bind(status);
        }
        if let Some(ref term) = params.q {
            q = q.bind(format!("%{term}%"));
        }
        q = q.bind(limit).bind(offset);
        q.fetch_all(pool).await
    }

    /// Count projects matching the same filters as [`Self::list`].
    pub async fn count(pool: &PgPool, params: &ProjectListParams) -> Result<i64, sqlx::Error> {
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.q.is_some() {
            conditions.push(format!(
                "(name ILIKE ${bind_idx} OR description ILIKE ${bind_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT COUNT(*) FROM projects {where_clause}");
        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(ref status) = params.status {
            q = q.bind(status);
        }
        if let Some(ref term) = params.q {
            q = q.bind(format!("%{term}%"));
        }
        q.fetch_one(pool).await
    }

    /// Count projects with the given status.
    pub async fn count_by_status(pool: &PgPool, status: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE status = $1")
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Count all projects.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    /// The collected amount is carried over from the stored row; the save
    /// rules may still clamp it when the target drops below it.
    ///
    /// Reads the current row first so the save rules see the merged
    /// figures. The read and the write are separate statements; a
    /// concurrent donation landing between them may be overwritten
    /// until the next total refresh.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let existing = match Self::find_by_id(pool, id).await? {
            Some(project) => project,
            None => return Ok(None),
        };

        let figures = ledger::apply_save_rules(
            Some(input.target_amount.unwrap_or(existing.target_amount)),
            Some(existing.current_amount),
            input.status.as_deref().unwrap_or(&existing.status),
        );

        let query = format!(
            "UPDATE projects SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                target_amount = $4, \
                current_amount = $5, \
                deadline = COALESCE($6, deadline), \
                status = $7, \
                image_url = COALESCE($8, image_url) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(figures.target_amount)
            .bind(figures.current_amount)
            .bind(input.deadline)
            .bind(&figures.status)
            .bind(input.image_url.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a project's collected total, applying the save rules.
    ///
    /// Called by the donation recorder after re-summing a project's
    /// donations. Returns `None` if the project no longer exists.
    pub async fn save_collected(
        pool: &PgPool,
        id: DbId,
        current_amount: Decimal,
    ) -> Result<Option<Project>, sqlx::Error> {
        let existing = match Self::find_by_id(pool, id).await? {
            Some(project) => project,
            None => return Ok(None),
        };

        let figures = ledger::apply_save_rules(
            Some(existing.target_amount),
            Some(current_amount),
            &existing.status,
        );

        // The save rules only ever advance active -> completed.
        if figures.status != existing.status {
            tracing::info!(project_id = id, "Project reached its target and completed");
        }

        let query = format!(
            "UPDATE projects SET current_amount = $2, status = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(figures.current_amount)
            .bind(&figures.status)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Donations cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
