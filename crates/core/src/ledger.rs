//! Financial bookkeeping rules for projects.
//!
//! Every write of a project's financial columns passes through
//! [`apply_save_rules`], which normalizes the figures and advances the
//! status when the target is reached. The derived read-side figures
//! (progress, days remaining, active flag) live here too so that the
//! database and API layers share one definition.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::project::STATUS_ACTIVE;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Save contract
// ---------------------------------------------------------------------------

/// Normalized financial figures produced by [`apply_save_rules`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFigures {
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub status: String,
}

/// Normalize a project's financial figures before any write.
///
/// Rules, applied in order:
/// 1. An absent target or collected amount is coerced to zero.
/// 2. The collected amount is clamped so it never exceeds the target.
/// 3. An `active` project whose collected amount has reached its target
///    becomes `completed`. Other statuses are never advanced.
pub fn apply_save_rules(
    target_amount: Option<Decimal>,
    current_amount: Option<Decimal>,
    status: &str,
) -> SavedFigures {
    let target_amount = target_amount.unwrap_or(Decimal::ZERO);
    let mut current_amount = current_amount.unwrap_or(Decimal::ZERO);

    if current_amount > target_amount {
        current_amount = target_amount;
    }

    let status = if current_amount >= target_amount && status == STATUS_ACTIVE {
        crate::project::STATUS_COMPLETED.to_string()
    } else {
        status.to_string()
    };

    SavedFigures {
        target_amount,
        current_amount,
        status,
    }
}

// ---------------------------------------------------------------------------
// Derived figures
// ---------------------------------------------------------------------------

/// Funding progress as a percentage, rounded to one decimal place and
/// capped at 100. A non-positive target yields 0.
pub fn progress_percentage(current_amount: Decimal, target_amount: Decimal) -> f64 {
    if target_amount <= Decimal::ZERO {
        return 0.0;
    }
    let ratio = match current_amount.checked_div(target_amount) {
        Some(r) => r,
        None => return 0.0,
    };
    let percent = match ratio.checked_mul(Decimal::ONE_HUNDRED) {
        Some(p) => p,
        None => return 0.0,
    };
    percent
        .round_dp(1)
        .min(Decimal::ONE_HUNDRED)
        .to_f64()
        .unwrap_or(0.0)
}

/// Whole days until the deadline, floored and never negative.
/// A project without a deadline has zero days remaining.
pub fn days_remaining(deadline: Option<Timestamp>, now: Timestamp) -> i64 {
    match deadline {
        Some(deadline) => (deadline - now).num_days().max(0),
        None => 0,
    }
}

/// Whether a project is currently accepting donations: its status is
/// `active`, its deadline has not passed, and its target is not yet met.
pub fn is_active(
    status: &str,
    deadline: Option<Timestamp>,
    current_amount: Decimal,
    target_amount: Decimal,
    now: Timestamp,
) -> bool {
    status == STATUS_ACTIVE
        && days_remaining(deadline, now) > 0
        && current_amount < target_amount
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
