//! Validation rules for incoming donations.

use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::error::CoreError;

/// Smallest donation accepted, in currency units.
pub const MIN_AMOUNT: Decimal = Decimal::ONE;

/// Maximum length for a donor's name (characters).
pub const MAX_DONOR_NAME_LENGTH: usize = 100;

/// Validate a donation amount against the minimum.
pub fn validate_amount(amount: Decimal) -> Result<(), CoreError> {
    if amount < MIN_AMOUNT {
        return Err(CoreError::Validation(format!(
            "Donation amount must be at least {}",
            MIN_AMOUNT
        )));
    }
    Ok(())
}

/// Validate a donor name: non-empty after trimming, within length bounds.
pub fn validate_donor_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Donor name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_DONOR_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Donor name exceeds maximum length of {} characters",
            MAX_DONOR_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validate a donor email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{}' is not a valid email address",
            email
        )))
    }
}

/// Validate every field of a new donation. Fails on the first violation.
pub fn validate_new(donor_name: &str, email: &str, amount: Decimal) -> Result<(), CoreError> {
    validate_donor_name(donor_name)?;
    validate_email(email)?;
    validate_amount(amount)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn amount_below_minimum_is_rejected() {
        assert_matches!(validate_amount(dec("0.99")), Err(CoreError::Validation(_)));
        assert!(validate_amount(Decimal::ZERO).is_err());
        assert!(validate_amount(dec("-5")).is_err());
    }

    #[test]
    fn amount_at_or_above_minimum_is_accepted() {
        assert!(validate_amount(Decimal::ONE).is_ok());
        assert!(validate_amount(dec("25.50")).is_ok());
    }

    #[test]
    fn donor_name_must_not_be_blank() {
        assert!(validate_donor_name("Jane Doe").is_ok());
        assert!(validate_donor_name("").is_err());
        assert!(validate_donor_name("   ").is_err());
    }

    #[test]
    fn donor_name_length_is_bounded() {
        let name = "x".repeat(MAX_DONOR_NAME_LENGTH);
        assert!(validate_donor_name(&name).is_ok());
        let too_long = "x".repeat(MAX_DONOR_NAME_LENGTH + 1);
        assert!(validate_donor_name(&too_long).is_err());
    }

    #[test]
    fn email_must_parse() {
        assert!(validate_email("donor@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn validate_new_checks_every_field() {
        assert!(validate_new("Jane", "jane@example.com", dec("25")).is_ok());
        assert!(validate_new("", "jane@example.com", dec("25")).is_err());
        assert!(validate_new("Jane", "nope", dec("25")).is_err());
        assert!(validate_new("Jane", "jane@example.com", Decimal::ZERO).is_err());
    }
}
