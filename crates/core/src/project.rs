//! Project status constants and field validation.
//!
//! Defines the closed status enumeration for fundraising projects and the
//! validation helpers applied to administrator writes. The financial save
//! rules live in [`crate::ledger`].

use rust_decimal::Decimal;
use validator::ValidateUrl;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Project is open for donations (subject to deadline and target checks).
pub const STATUS_ACTIVE: &str = "active";
/// Project has reached its target (set automatically on save).
pub const STATUS_COMPLETED: &str = "completed";
/// Project is awaiting review and not yet published.
pub const STATUS_PENDING: &str = "pending";

/// All valid project statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_COMPLETED, STATUS_PENDING];

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Maximum length for a project name (characters).
pub const MAX_NAME_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid project status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

/// Validate a project name: non-empty after trimming, within length bounds.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Project name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Project name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validate a target amount: must not be negative.
pub fn validate_target_amount(amount: Decimal) -> Result<(), CoreError> {
    if amount < Decimal::ZERO {
        return Err(CoreError::Validation(
            "Target amount must not be negative".to_string(),
        ));
    }
    Ok(())
}

/// Validate an optional project image reference.
pub fn validate_image_url(url: &str) -> Result<(), CoreError> {
    if url.validate_url() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Image URL '{}' is not a valid URL",
            url
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "Status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert_matches!(validate_status("archived"), Err(CoreError::Validation(_)));
        assert!(validate_status("").is_err());
        assert!(validate_status("Active").is_err());
    }

    #[test]
    fn name_must_not_be_blank() {
        assert!(validate_name("Clean Water for Everyone").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn name_length_is_bounded() {
        let name = "x".repeat(MAX_NAME_LENGTH);
        assert!(validate_name(&name).is_ok());
        let too_long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name(&too_long).is_err());
    }

    #[test]
    fn target_amount_must_be_non_negative() {
        assert!(validate_target_amount(Decimal::ZERO).is_ok());
        assert!(validate_target_amount(Decimal::from(1000)).is_ok());
        assert!(validate_target_amount(Decimal::from(-1)).is_err());
    }

    #[test]
    fn image_url_must_parse() {
        assert!(validate_image_url("https://example.com/cover.png").is_ok());
        assert!(validate_image_url("not a url").is_err());
        assert!(validate_image_url("").is_err());
    }
}
