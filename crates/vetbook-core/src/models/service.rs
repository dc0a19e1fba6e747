//! The fixed service catalog offered by the clinic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A bookable clinic service.
///
/// The catalog is fixed on the client; the server validates the final
/// selection again at submission time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Service {
    Consultation,
    Vaccination,
    Deworming,
    Grooming,
    Ultrasound,
    Confinement,
    Surgery,
}

impl Service {
    /// Every service offered, in catalog order.
    pub const CATALOG: [Service; 7] = [
        Service::Consultation,
        Service::Vaccination,
        Service::Deworming,
        Service::Grooming,
        Service::Ultrasound,
        Service::Confinement,
        Service::Surgery,
    ];

    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Consultation => "Consultation",
            Service::Vaccination => "Vaccination",
            Service::Deworming => "Deworming",
            Service::Grooming => "Grooming",
            Service::Ultrasound => "Ultrasound",
            Service::Confinement => "Confinement",
            Service::Surgery => "Surgery",
        }
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "consultation" => Ok(Service::Consultation),
            "vaccination" => Ok(Service::Vaccination),
            "deworming" => Ok(Service::Deworming),
            "grooming" => Ok(Service::Grooming),
            "ultrasound" => Ok(Service::Ultrasound),
            "confinement" => Ok(Service::Confinement),
            "surgery" => Ok(Service::Surgery),
            _ => Err(format!("Unknown service: {s}")),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
