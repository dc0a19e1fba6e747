//! Status enumeration for appointments.
//!
//! Statuses are assigned exclusively by the server; the client never computes
//! or transitions them, it only filters and sorts what it receives.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of server-assigned appointment statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// Awaiting clinic approval
    Pending,

    /// Confirmed by the clinic
    Approved,

    /// Cancelled by the owner
    Cancelled,

    /// Rejected by the clinic
    Rejected,

    /// Visit took place
    Completed,

    /// Owner did not show up
    #[serde(rename = "No-show")]
    NoShow,
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(AppointmentStatus::Pending),
            "approved" => Ok(AppointmentStatus::Approved),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "rejected" => Ok(AppointmentStatus::Rejected),
            "completed" => Ok(AppointmentStatus::Completed),
            "no-show" | "noshow" | "no_show" => Ok(AppointmentStatus::NoShow),
            _ => Err(format!("Invalid appointment status: {s}")),
        }
    }
}

impl AppointmentStatus {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Approved => "Approved",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Rejected => "Rejected",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::NoShow => "No-show",
        }
    }

    /// Whether the appointment still occupies a slot on the calendar.
    ///
    /// Cancelled and rejected appointments are hidden from the calendar and
    /// dashboard views; everything else is shown.
    pub fn is_active(&self) -> bool {
        !matches!(
            self,
            AppointmentStatus::Cancelled | AppointmentStatus::Rejected
        )
    }

    /// Whether the owner may still cancel the appointment.
    pub fn is_cancellable(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Pending | AppointmentStatus::Approved
        )
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "◌ Pending",
            AppointmentStatus::Approved => "✓ Approved",
            AppointmentStatus::Cancelled => "✗ Cancelled",
            AppointmentStatus::Rejected => "✗ Rejected",
            AppointmentStatus::Completed => "● Completed",
            AppointmentStatus::NoShow => "– No-show",
        }
    }
}
