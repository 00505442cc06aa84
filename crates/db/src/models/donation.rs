//! Donation entity model and DTOs.

use givehub_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A donation row from the `donations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Donation {
    pub id: DbId,
    pub project_id: DbId,
    pub donor_name: String,
    pub amount: Decimal,
    pub email: String,
    pub created_at: Timestamp,
    pub is_anonymous: bool,
}

/// A donation joined with the name of the project it funds.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DonationWithProject {
    pub id: DbId,
    pub project_id: DbId,
    pub project_name: String,
    pub donor_name: String,
    pub amount: Decimal,
    pub email: String,
    pub created_at: Timestamp,
    pub is_anonymous: bool,
}

/// DTO for recording a donation through the public form.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDonation {
    pub donor_name: String,
    pub email: String,
    pub amount: Decimal,
    #[serde(default)]
    pub is_anonymous: bool,
}

/// DTO for correcting a donation record. All fields are optional;
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDonation {
    pub project_id: Option<DbId>,
    pub donor_name: Option<String>,
    pub email: Option<String>,
    pub amount: Option<Decimal>,
    pub is_anonymous: Option<bool>,
}

/// Filters for listing donations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationListParams {
    pub project_id: Option<DbId>,
    pub is_anonymous: Option<bool>,
    /// Case-insensitive match against donor name, email, or project name.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
