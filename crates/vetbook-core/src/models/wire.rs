//! Wire (de)serialization helpers for calendar dates and slot times.
//!
//! The API sends dates either as plain `YYYY-MM-DD` strings or as full
//! timestamps (`YYYY-MM-DDTHH:MM:SS`); only the calendar day is meaningful to
//! the client. Slot times travel as 24-hour `HH:MM` strings.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Deserializer, Serializer};

/// Serde adapter for `appointment_date`-style fields.
pub(crate) mod date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for `appointment_time`-style fields.
pub(crate) mod time {
    use super::*;

    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parses a calendar day, tolerating a trailing timestamp component.
pub fn parse_date(raw: &str) -> Result<Date, jiff::Error> {
    let day = raw.split('T').next().unwrap_or(raw);
    day.parse::<Date>()
}

/// Parses a 24-hour `HH:MM` slot time.
pub fn parse_time(raw: &str) -> Result<Time, jiff::Error> {
    Time::strptime("%H:%M", raw)
}

/// Formats a slot time as the `HH:MM` string the API expects.
pub fn format_time(time: Time) -> String {
    time.strftime("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil;

    #[test]
    fn test_parse_date_plain() {
        assert_eq!(parse_date("2025-06-01").unwrap(), civil::date(2025, 6, 1));
    }

    #[test]
    fn test_parse_date_with_timestamp() {
        assert_eq!(
            parse_date("2025-06-01T00:00:00").unwrap(),
            civil::date(2025, 6, 1)
        );
    }

    #[test]
    fn test_time_round_trip() {
        let parsed = parse_time("09:00").unwrap();
        assert_eq!(parsed, civil::time(9, 0, 0, 0));
        assert_eq!(format_time(parsed), "09:00");
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert!(parse_time("9 o'clock").is_err());
    }
}
