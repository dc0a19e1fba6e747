//! Bookable time-slot generation.
//!
//! The clinic offers half-hour slots from opening at 08:00 up to (but not
//! including) closing at 18:00 - twenty slots per day. The sequence is a
//! pure function of nothing: deterministic, finite, restartable by calling
//! [`time_slots`] again.

use jiff::civil::{time, Time};
use jiff::ToSpan;

/// First bookable slot of the day.
pub const OPENING: Time = time(8, 0, 0, 0);

/// End of the bookable day; no slot starts at or after this time.
pub const CLOSING: Time = time(18, 0, 0, 0);

/// Slot length in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Lazy iterator over the day's bookable slots.
#[derive(Debug, Clone)]
pub struct TimeSlots {
    next: Option<Time>,
}

/// Returns the day's slot sequence, starting at [`OPENING`].
pub fn time_slots() -> TimeSlots {
    TimeSlots {
        next: Some(OPENING),
    }
}

/// Whether `candidate` is one of the day's bookable slots.
pub fn is_valid_slot(candidate: Time) -> bool {
    time_slots().any(|slot| slot == candidate)
}

impl Iterator for TimeSlots {
    type Item = Time;

    fn next(&mut self) -> Option<Time> {
        let current = self.next?;
        if current >= CLOSING {
            self.next = None;
            return None;
        }
        self.next = current.checked_add(SLOT_MINUTES.minutes()).ok();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::wire::format_time;

    #[test]
    fn test_slot_count() {
        assert_eq!(time_slots().count(), 20);
    }

    #[test]
    fn test_slot_bounds() {
        let slots: Vec<Time> = time_slots().collect();
        assert_eq!(format_time(slots[0]), "08:00");
        assert_eq!(format_time(*slots.last().unwrap()), "17:30");
    }

    #[test]
    fn test_slots_strictly_increase_by_half_hour() {
        let slots: Vec<Time> = time_slots().collect();
        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[1], pair[0].checked_add(30.minutes()).unwrap());
        }
    }

    #[test]
    fn test_sequence_is_restartable() {
        let first: Vec<Time> = time_slots().collect();
        let second: Vec<Time> = time_slots().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_valid_slot() {
        assert!(is_valid_slot(time(9, 0, 0, 0)));
        assert!(is_valid_slot(time(17, 30, 0, 0)));
        assert!(!is_valid_slot(time(18, 0, 0, 0)));
        assert!(!is_valid_slot(time(9, 15, 0, 0)));
        assert!(!is_valid_slot(time(7, 30, 0, 0)));
    }
}
