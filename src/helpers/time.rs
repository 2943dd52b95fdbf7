use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Utc};

/// Point in time at which a token issued now with `expires_in` seconds of
/// lifetime should be renewed. Fractional seconds are truncated.
/// A lifetime too large to place on the calendar is an error.
pub fn refresh_deadline(expires_in: i64, ratio: f64) -> Result<DateTime<Utc>> {
    let seconds_to_refresh = (expires_in as f64 * ratio) as i64;
    Duration::try_seconds(seconds_to_refresh)
        .and_then(|delta| Utc::now().checked_add_signed(delta))
        .ok_or_else(|| anyhow!("token lifetime of {} seconds is out of range", expires_in))
}
