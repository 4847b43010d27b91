// Event end time derived from the start time
use chrono::{Duration, NaiveTime};

use crate::error::EngineError;

/// Length of the service, in hours.
pub const EVENT_DURATION_HOURS: i64 = 3;

/// Parses "HH:MM" as two colon-separated integers forming a valid clock time.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, EngineError> {
    let invalid = || EngineError::InvalidTimeFormat(s.to_string());

    let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.trim().parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

/// Start time plus the service length, wrapping past midnight.
pub fn derive_end_time(start: &str) -> Result<String, EngineError> {
    let start_time = parse_clock_time(start)?;
    let (end_time, _) = start_time.overflowing_add_signed(Duration::hours(EVENT_DURATION_HOURS));
    Ok(end_time.format("%H:%M").to_string())
}
