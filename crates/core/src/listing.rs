//! Listing field validation and normalization.
//!
//! Multipart form values arrive as strings; these helpers parse them into
//! typed values, rejecting malformed input instead of coercing it.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Listing is on the market.
pub const STATUS_ACTIVE: &str = "active";

/// Listing is under contract.
pub const STATUS_PENDING: &str = "pending";

/// Listing has closed.
pub const STATUS_SOLD: &str = "sold";

/// Valid status values.
const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_PENDING, STATUS_SOLD];

/// Validate that `status` is one of the known listing statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {VALID_STATUSES:?}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Scalar normalization
// ---------------------------------------------------------------------------

/// Parse a non-negative decimal field (price, baths).
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, CoreError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("Field '{field}' must be a number")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "Field '{field}' must be a non-negative number"
        )));
    }
    Ok(value)
}

/// Parse a non-negative integer field (beds, sqft).
pub fn parse_count(field: &'static str, raw: &str) -> Result<i32, CoreError> {
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("Field '{field}' must be an integer")))?;
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "Field '{field}' must be a non-negative integer"
        )));
    }
    Ok(value)
}

/// Parse a boolean flag from its client representations.
///
/// The string `"true"` and boolean `true` are equivalent truthy signals;
/// `"1"` is accepted for form encoders that send it. Everything else is
/// false.
pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1")
}

/// Treat empty or whitespace-only form values as absent.
pub fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
