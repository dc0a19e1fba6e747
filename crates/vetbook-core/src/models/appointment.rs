//! Appointment model definition.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use super::{wire, AppointmentStatus};

/// An appointment as returned by the appointment-list endpoint.
///
/// The server owns every field, including the status; the client only
/// filters and sorts what it receives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// Unique identifier for the appointment
    #[serde(rename = "appointment_id")]
    pub id: u64,

    /// Display name of the pet the appointment is for
    pub pet_name: String,

    /// Booked services, verbatim from the server
    #[serde(default)]
    pub services: Vec<String>,

    /// Calendar day of the appointment
    #[serde(rename = "appointment_date", with = "wire::date")]
    pub date: Date,

    /// Half-hour slot the appointment starts at
    #[serde(rename = "appointment_time", with = "wire::time")]
    pub time: Time,

    /// Server-assigned status
    pub status: AppointmentStatus,

    /// Free-text notes entered at booking time
    #[serde(default)]
    pub notes: Option<String>,
}

impl Appointment {
    /// Sort key ordering appointments chronologically.
    pub fn starts_at(&self) -> (Date, Time) {
        (self.date, self.time)
    }
}
