//! Pagination clamping shared by list endpoints.

/// Default number of rows returned by list endpoints.
pub const DEFAULT_LIMIT: i64 = 20;

/// Maximum number of rows a caller may request per page.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a requested limit into `1..=MAX_LIMIT`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).max(1).min(MAX_LIMIT)
}

/// Clamp a requested offset to be non-negative, defaulting to zero.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
