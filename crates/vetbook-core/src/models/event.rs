//! Public clinic event model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::wire;

/// A public clinic event (vaccination drive, open day, holiday closure).
///
/// Events are visible to every owner and are merged with personal
/// appointments in the calendar view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClinicEvent {
    /// Unique identifier for the event
    #[serde(rename = "event_id")]
    pub id: u64,

    /// Event title
    pub title: String,

    /// Optional longer description
    #[serde(default)]
    pub description: Option<String>,

    /// Calendar day the event takes place
    #[serde(rename = "event_date", with = "wire::date")]
    pub date: Date,
}
