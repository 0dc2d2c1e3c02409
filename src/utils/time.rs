use crate::error::{AdminResult, Error};
use chrono::{DateTime, Duration, NaiveDateTime};

/// Minutes in one day; clock times live in `0..MINUTES_PER_DAY`
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Split an `HH:MM` string into its numeric parts
fn split_clock(text: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = text.split_once(':')?;
    let is_component = |part: &str| {
        !part.is_empty() && part.len() <= 2 && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !is_component(hours) || !is_component(minutes) {
        return None;
    }
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// Parse a 24-hour `HH:MM` clock string into minutes since midnight.
///
/// Hours outside 0-23 or minutes outside 0-59 are rejected rather than clamped.
pub fn to_minutes(text: &str) -> AdminResult<u32> {
    let (hours, minutes) =
        split_clock(text.trim()).ok_or_else(|| Error::InvalidFormat(text.to_string()))?;
    if hours > 23 || minutes > 59 {
        return Err(Error::InvalidFormat(text.to_string()));
    }
    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a zero-padded `HH:MM` string.
///
/// Only defined on a single day; anything from 24:00 on is `OutOfRange`.
/// Use [`format_duration`] for lengths that may exceed a day.
pub fn to_clock_string(minutes: u32) -> AdminResult<String> {
    if minutes >= MINUTES_PER_DAY {
        return Err(Error::OutOfRange(minutes));
    }
    Ok(format_duration(minutes))
}

/// Render a duration in minutes as `HH:MM`, letting the hours grow past 23
pub fn format_duration(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parse a `HH:MM` duration; hours are unbounded, minutes must be 0-59
pub fn parse_duration(text: &str) -> AdminResult<u32> {
    let trimmed = text.trim();
    let (hours, minutes) = trimmed
        .split_once(':')
        .filter(|(h, m)| {
            !h.is_empty()
                && m.len() == 2
                && h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit())
        })
        .ok_or_else(|| Error::InvalidFormat(text.to_string()))?;
    let hours: u32 = hours
        .parse()
        .map_err(|_| Error::InvalidFormat(text.to_string()))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| Error::InvalidFormat(text.to_string()))?;
    if minutes > 59 {
        return Err(Error::InvalidFormat(text.to_string()));
    }
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| Error::InvalidFormat(text.to_string()))
}

/// Parse an appointment timestamp as sent by the API.
///
/// Offsets are dropped after conversion to the stated local wall time, matching
/// how the calendar shows appointments.
pub fn parse_appointment_time(text: &str) -> AdminResult<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .map_err(|_| Error::InvalidFormat(text.to_string()))
}

/// End of an appointment starting at `start` and lasting `duration` minutes
pub fn appointment_end(start: NaiveDateTime, duration: u32) -> NaiveDateTime {
    start + Duration::minutes(i64::from(duration))
}
