//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a `Display` impl with graceful empty
//! states, without putting list formatting on the models themselves.

use std::fmt;

use jiff::civil::Time;

use super::datetime;
use crate::calendar::CalendarDay;
use crate::models::{Appointment, Pet};

/// Newtype wrapper for displaying the owner's pet list.
pub struct Pets(pub Vec<Pet>);

impl fmt::Display for Pets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(
                f,
                "No pets found. Please add a pet to your profile first."
            )
        } else {
            for pet in &self.0 {
                write!(f, "{pet}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying an appointment list.
pub struct Appointments(pub Vec<Appointment>);

impl fmt::Display for Appointments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No appointments found.")
        } else {
            for appointment in &self.0 {
                write!(f, "{appointment}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a merged calendar.
pub struct CalendarDays(pub Vec<CalendarDay>);

impl fmt::Display for CalendarDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Nothing scheduled.");
        }
        for day in &self.0 {
            writeln!(f, "## {}", datetime::long_date(day.date))?;
            for appointment in &day.appointments {
                writeln!(
                    f,
                    "- {} {} ({}) - {}",
                    datetime::slot(appointment.time),
                    appointment.pet_name,
                    appointment.services.join(", "),
                    appointment.status.as_str()
                )?;
            }
            for event in &day.events {
                write!(f, "{event}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the day's bookable slots.
pub struct SlotList(pub Vec<Time>);

impl fmt::Display for SlotList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            writeln!(f, "{}", datetime::slot(*slot))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil;

    use super::*;
    use crate::calendar;
    use crate::models::AppointmentStatus;
    use crate::wizard::time_slots;

    fn sample_appointment() -> Appointment {
        Appointment {
            id: 1,
            pet_name: "Biscuit".to_string(),
            services: vec!["Grooming".to_string()],
            date: civil::date(2025, 6, 1),
            time: civil::time(9, 0, 0, 0),
            status: AppointmentStatus::Pending,
            notes: None,
        }
    }

    #[test]
    fn test_empty_pets_message() {
        let output = format!("{}", Pets(vec![]));
        assert!(output.contains("No pets found"));
    }

    #[test]
    fn test_empty_appointments_message() {
        let output = format!("{}", Appointments(vec![]));
        assert_eq!(output, "No appointments found.\n");
    }

    #[test]
    fn test_calendar_days_render_headings() {
        let days = calendar::merge(vec![sample_appointment()], vec![]);
        let output = format!("{}", CalendarDays(days));
        assert!(output.contains("## Sunday, June 01, 2025"));
        assert!(output.contains("09:00 Biscuit"));
    }

    #[test]
    fn test_slot_list_lines() {
        let output = format!("{}", SlotList(time_slots().collect()));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines[0], "08:00");
        assert_eq!(lines[19], "17:30");
    }
}
