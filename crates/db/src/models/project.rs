//! Project entity model and DTOs.

use givehub_core::ledger;
use givehub_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub created_at: Timestamp,
    pub deadline: Option<Timestamp>,
    pub status: String,
    pub image_url: Option<String>,
}

impl Project {
    /// Funding progress as a percentage, rounded to one decimal and capped at 100.
    pub fn progress_percentage(&self) -> f64 {
        ledger::progress_percentage(self.current_amount, self.target_amount)
    }

    /// Whole days until the deadline, never negative.
    pub fn days_remaining(&self, now: Timestamp) -> i64 {
        ledger::days_remaining(self.deadline, now)
    }

    /// Whether the project is currently accepting donations.
    pub fn is_active(&self, now: Timestamp) -> bool {
        ledger::is_active(
            &self.status,
            self.deadline,
            self.current_amount,
            self.target_amount,
            now,
        )
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    /// Defaults to 0 if omitted.
    pub target_amount: Option<Decimal>,
    pub deadline: Option<Timestamp>,
    /// Defaults to `active` if omitted.
    pub status: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating an existing project. All fields are optional;
/// `None` leaves the stored value unchanged.
///
/// The collected amount is deliberately absent: it is owned by the
/// donation recompute and can only shrink here via clamping when the
/// target drops below it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<Decimal>,
    pub deadline: Option<Timestamp>,
    pub status: Option<String>,
    pub image_url: Option<String>,
}

/// Filters for listing projects. `q` matches name or description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
