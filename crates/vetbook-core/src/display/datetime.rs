//! Date and slot formatting helpers for display output.

use jiff::civil::{Date, Time};

/// Formats a calendar day for headings, e.g. `Sunday, June 01, 2025`.
pub fn long_date(date: Date) -> String {
    date.strftime("%A, %B %d, %Y").to_string()
}

/// Formats a slot time as the familiar `HH:MM`.
pub fn slot(time: Time) -> String {
    crate::models::wire::format_time(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil;

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(civil::date(2025, 6, 1)), "Sunday, June 01, 2025");
    }

    #[test]
    fn test_slot() {
        assert_eq!(slot(civil::time(8, 0, 0, 0)), "08:00");
        assert_eq!(slot(civil::time(17, 30, 0, 0)), "17:30");
    }
}
