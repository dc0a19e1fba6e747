//! Display implementations for domain models.
//!
//! All output is markdown. Lists of these render one after another, so each
//! impl ends with a blank-line separator where it spans multiple lines.

use std::fmt;

use super::datetime;
use crate::models::{Appointment, ClinicEvent, Pet};
use crate::wizard::BookingSummary;

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** ({})", self.name, self.species)?;
        if let Some(breed) = &self.breed {
            write!(f, " - {breed}")?;
        }
        writeln!(f, " `#{}`", self.id)
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} - {}", self.pet_name, self.status.with_icon())?;
        writeln!(f, "**ID:** {}", self.id)?;
        writeln!(
            f,
            "**When:** {} at {}",
            datetime::long_date(self.date),
            datetime::slot(self.time)
        )?;
        if !self.services.is_empty() {
            writeln!(f, "**Services:** {}", self.services.join(", "))?;
        }
        if let Some(notes) = &self.notes {
            if !notes.is_empty() {
                writeln!(f, "**Notes:** {notes}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for ClinicEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- *{}* ({})",
            self.title,
            datetime::long_date(self.date)
        )?;
        if let Some(description) = &self.description {
            write!(f, " - {description}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for BookingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Appointment Summary")?;
        writeln!(f, "**Pet(s):** {}", self.pet_names.join(", "))?;
        writeln!(f, "**Service(s):** {}", self.service_names.join(", "))?;
        match self.date {
            Some(date) => writeln!(f, "**Date:** {}", datetime::long_date(date))?,
            None => writeln!(f, "**Date:** (not selected)")?,
        }
        match self.time {
            Some(time) => writeln!(f, "**Time:** {}", datetime::slot(time))?,
            None => writeln!(f, "**Time:** (not selected)")?,
        }
        if !self.notes.is_empty() {
            writeln!(f, "**Notes:** {}", self.notes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil;

    use crate::models::{Appointment, AppointmentStatus, Pet};
    use crate::wizard::BookingSummary;

    #[test]
    fn test_pet_display() {
        let pet = Pet {
            id: 42,
            name: "Biscuit".to_string(),
            species: "Dog".to_string(),
            breed: Some("Corgi".to_string()),
            gender: None,
            image_url: None,
        };
        let output = format!("{pet}");
        assert!(output.contains("Biscuit"));
        assert!(output.contains("Corgi"));
        assert!(output.contains("#42"));
    }

    #[test]
    fn test_appointment_display() {
        let appointment = Appointment {
            id: 7,
            pet_name: "Biscuit".to_string(),
            services: vec!["Grooming".to_string(), "Vaccination".to_string()],
            date: civil::date(2025, 6, 1),
            time: civil::time(9, 0, 0, 0),
            status: AppointmentStatus::Approved,
            notes: Some("gentle please".to_string()),
        };
        let output = format!("{appointment}");
        assert!(output.contains("✓ Approved"));
        assert!(output.contains("Grooming, Vaccination"));
        assert!(output.contains("09:00"));
        assert!(output.contains("gentle please"));
    }

    #[test]
    fn test_summary_display_with_gaps() {
        let summary = BookingSummary {
            pet_names: vec!["Biscuit".to_string()],
            service_names: vec!["Grooming".to_string()],
            date: None,
            time: None,
            notes: String::new(),
        };
        let output = format!("{summary}");
        assert!(output.contains("(not selected)"));
        assert!(!output.contains("Notes:"));
    }
}
