//! Canonical timestamp codec shared by every timestamp-producing and
//! -consuming code path in the wait subsystem.

use chrono::{DateTime, FixedOffset};

use crate::error::WaitError;

/// Strict parser for the canonical ISO-8601 extended offset date-time
/// format: `2023-01-01T00:00:00+00:00`, with the `Z` zone designator
/// accepted in place of a numeric offset. Bare local times and
/// non-conforming separators are rejected, never approximated.
pub fn parse_wait_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, WaitError> {
    DateTime::parse_from_rfc3339(raw).map_err(|_| WaitError::TimestampFormat {
        path: None,
        value: raw.to_string(),
    })
}

/// Inverse of [`parse_wait_timestamp`]; used for deterministic fixtures
/// and for echoing values back in diagnostics.
pub fn format_wait_timestamp(ts: &DateTime<FixedOffset>) -> String {
    ts.to_rfc3339()
}
