//! Time-of-day arithmetic helpers.
//!
//! The backing store keeps clock fields as `"HH:MM"` / `"HH:MM:SS"` text;
//! everything in the engine works on integer minutes since midnight. This
//! module owns the conversions and the overnight wraparound rule.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Minutes in a day; the wraparound modulus for all interval math.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Parses a `"HH:MM"` or `"HH:MM:SS"` string into minutes since midnight.
///
/// Seconds are validated but do not contribute to the result. Fails with
/// [`EngineError::InvalidTimeFormat`] when the text is not colon-delimited,
/// a component is non-numeric, or a component is out of range.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::parse_time_to_minutes;
///
/// assert_eq!(parse_time_to_minutes("08:30").unwrap(), 510);
/// assert_eq!(parse_time_to_minutes("17:00:45").unwrap(), 1020);
/// assert!(parse_time_to_minutes("8h30").is_err());
/// ```
pub fn parse_time_to_minutes(text: &str) -> EngineResult<u32> {
    let invalid = || EngineError::InvalidTimeFormat {
        value: text.to_string(),
    };

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(invalid());
    }

    let hours: u32 = parts[0].trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = parts[1].trim().parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    if let Some(seconds_part) = parts.get(2) {
        let seconds: u32 = seconds_part.trim().parse().map_err(|_| invalid())?;
        if seconds > 59 {
            return Err(invalid());
        }
    }

    Ok(hours * 60 + minutes)
}

/// Duration in minutes from `start` to `end`, both minutes since midnight.
///
/// When `end < start` the interval is assumed to wrap past midnight, so
/// the result is `(1440 - start) + end`. Never negative.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::interval_minutes;
///
/// assert_eq!(interval_minutes(480, 1020), 540);  // 08:00 -> 17:00
/// assert_eq!(interval_minutes(1320, 360), 480);  // 22:00 -> 06:00
/// assert_eq!(interval_minutes(600, 600), 0);
/// ```
pub fn interval_minutes(start: u32, end: u32) -> u32 {
    if end >= start {
        end - start
    } else {
        (MINUTES_PER_DAY - start) + end
    }
}

/// Adds `delta` minutes to a time-of-day string, wrapping modulo 24h.
///
/// Returns the result formatted as `"HH:MM:SS"`.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::add_minutes_to_time;
///
/// assert_eq!(add_minutes_to_time("23:30", 45).unwrap(), "00:15:00");
/// assert_eq!(add_minutes_to_time("08:00:00", -90).unwrap(), "06:30:00");
/// ```
pub fn add_minutes_to_time(text: &str, delta: i64) -> EngineResult<String> {
    let base = i64::from(parse_time_to_minutes(text)?);
    let wrapped = (base + delta).rem_euclid(i64::from(MINUTES_PER_DAY));
    Ok(format!("{:02}:{:02}:00", wrapped / 60, wrapped % 60))
}

/// Converts minutes to decimal hours, rounded to 2 decimal places.
///
/// Buckets are converted independently with this helper; totals are then
/// the plain sum of already-rounded values.
pub fn minutes_to_hours(minutes: u32) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_hh_mm() {
        assert_eq!(parse_time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(parse_time_to_minutes("08:10").unwrap(), 490);
        assert_eq!(parse_time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_parses_hh_mm_ss_ignoring_seconds() {
        assert_eq!(parse_time_to_minutes("08:10:59").unwrap(), 490);
        assert_eq!(parse_time_to_minutes("19:00:00").unwrap(), 1140);
    }

    #[test]
    fn test_rejects_missing_colons() {
        assert!(parse_time_to_minutes("0810").is_err());
        assert!(parse_time_to_minutes("8h30").is_err());
        assert!(parse_time_to_minutes("").is_err());
    }

    #[test]
    fn test_rejects_non_numeric_components() {
        assert!(parse_time_to_minutes("ab:cd").is_err());
        assert!(parse_time_to_minutes("08:3x").is_err());
        assert!(parse_time_to_minutes("08:30:zz").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_components() {
        assert!(parse_time_to_minutes("24:00").is_err());
        assert!(parse_time_to_minutes("08:60").is_err());
        assert!(parse_time_to_minutes("08:30:60").is_err());
    }

    #[test]
    fn test_rejects_too_many_components() {
        assert!(parse_time_to_minutes("08:30:00:00").is_err());
    }

    #[test]
    fn test_interval_same_day() {
        assert_eq!(interval_minutes(480, 1020), 540);
        assert_eq!(interval_minutes(0, 1439), 1439);
    }

    #[test]
    fn test_interval_wraps_past_midnight() {
        // 22:00 -> 06:00 is an 8 hour overnight span
        assert_eq!(interval_minutes(1320, 360), 480);
        // 23:59 -> 00:01
        assert_eq!(interval_minutes(1439, 1), 2);
    }

    #[test]
    fn test_interval_zero_length() {
        assert_eq!(interval_minutes(510, 510), 0);
    }

    #[test]
    fn test_add_minutes_wraps_forward() {
        assert_eq!(add_minutes_to_time("23:30", 45).unwrap(), "00:15:00");
        assert_eq!(add_minutes_to_time("00:00", 1440).unwrap(), "00:00:00");
    }

    #[test]
    fn test_add_minutes_wraps_backward() {
        assert_eq!(add_minutes_to_time("00:15", -30).unwrap(), "23:45:00");
    }

    #[test]
    fn test_add_minutes_plain() {
        assert_eq!(add_minutes_to_time("08:00:00", 90).unwrap(), "09:30:00");
    }

    #[test]
    fn test_add_minutes_propagates_parse_error() {
        assert!(add_minutes_to_time("late", 10).is_err());
    }

    #[test]
    fn test_minutes_to_hours_rounds_to_two_decimals() {
        assert_eq!(minutes_to_hours(480), Decimal::new(800, 2)); // 8.00
        assert_eq!(minutes_to_hours(200), Decimal::new(333, 2)); // 3.33
        assert_eq!(minutes_to_hours(50), Decimal::new(83, 2)); // 0.83
        assert_eq!(minutes_to_hours(0), Decimal::ZERO.round_dp(2));
    }
}
