//! Input validation helpers
//!
//! Boundary checks for the availability and layout endpoints. Failures are
//! reported as [`AppError::validation`] (HTTP 400).

use chrono::NaiveDateTime;

use crate::utils::AppError;

// ── Limits ──────────────────────────────────────────────────────────

pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 1000;

/// Most table moves accepted in one layout update
pub const MAX_LAYOUT_UPDATES: usize = 1000;

/// Accepted `dateTime` shapes, seconds optional
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

// ── Helpers ─────────────────────────────────────────────────────────

pub fn validate_party_size(party_size: u32) -> Result<u32, AppError> {
    if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&party_size) {
        return Err(AppError::validation(format!(
            "partySize must be between {MIN_PARTY_SIZE} and {MAX_PARTY_SIZE}"
        ))
        .with_detail("partySize", party_size));
    }
    Ok(party_size)
}

pub fn validate_layout_update_count(count: usize) -> Result<(), AppError> {
    if count > MAX_LAYOUT_UPDATES {
        return Err(AppError::validation(format!(
            "too many layout updates ({count}, max {MAX_LAYOUT_UPDATES})"
        )));
    }
    Ok(())
}

/// Parse an ISO-8601 local date-time such as `2026-03-10T19:00`
pub fn parse_date_time(value: &str) -> Result<NaiveDateTime, AppError> {
    let value = value.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| {
            AppError::validation("dateTime must look like 2026-03-10T19:00")
                .with_detail("dateTime", value)
        })
}
