//! Calendar merge-and-filter logic.
//!
//! The calendar view shows the owner's appointments and the clinic's public
//! events side by side, grouped by day. Cancelled and rejected appointments
//! are hidden; everything stays sorted chronologically. All of this is a pure
//! projection of what the server returned - the client computes nothing
//! authoritative here.

use std::collections::BTreeMap;

use jiff::civil::Date;

use crate::models::{Appointment, ClinicEvent};

/// One day on the merged calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: Date,
    /// Active appointments that day, sorted by slot time
    pub appointments: Vec<Appointment>,
    /// Public clinic events that day
    pub events: Vec<ClinicEvent>,
}

impl CalendarDay {
    fn empty(date: Date) -> Self {
        Self {
            date,
            appointments: Vec::new(),
            events: Vec::new(),
        }
    }
}

/// Merges appointments and events into a day-keyed calendar.
///
/// Cancelled and rejected appointments are filtered out before grouping.
/// Days appear in chronological order; a day with only events (or only
/// appointments) still appears.
pub fn merge(appointments: Vec<Appointment>, events: Vec<ClinicEvent>) -> Vec<CalendarDay> {
    let mut days: BTreeMap<Date, CalendarDay> = BTreeMap::new();
    for appointment in appointments {
        if !appointment.status.is_active() {
            continue;
        }
        days.entry(appointment.date)
            .or_insert_with(|| CalendarDay::empty(appointment.date))
            .appointments
            .push(appointment);
    }
    for event in events {
        days.entry(event.date)
            .or_insert_with(|| CalendarDay::empty(event.date))
            .events
            .push(event);
    }
    let mut days: Vec<CalendarDay> = days.into_values().collect();
    for day in &mut days {
        day.appointments.sort_by_key(|a| a.time);
    }
    days
}

/// Restricts a merged calendar to one month.
pub fn month_view(days: Vec<CalendarDay>, year: i16, month: i8) -> Vec<CalendarDay> {
    days.into_iter()
        .filter(|d| d.date.year() == year && d.date.month() == month)
        .collect()
}

/// The dashboard's upcoming list: pending or approved appointments from
/// `today` onward, soonest first.
pub fn upcoming(appointments: Vec<Appointment>, today: Date) -> Vec<Appointment> {
    let mut upcoming: Vec<Appointment> = appointments
        .into_iter()
        .filter(|a| a.status.is_cancellable() && a.date >= today)
        .collect();
    upcoming.sort_by_key(Appointment::starts_at);
    upcoming
}
