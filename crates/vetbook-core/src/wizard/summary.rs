//! Derived view model for the summary phase.

use jiff::civil::{Date, Time};

use super::Draft;
use crate::models::Pet;

/// Pure projection of the draft against the currently loaded pet list.
///
/// Computed at render time, never stored: selected pet ids are resolved to
/// display names against whatever pet list the wizard holds at that moment,
/// so the summary always reflects the most recently accepted pet load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    /// Display names of the selected pets, in selection order. Ids that no
    /// longer resolve against the loaded list are omitted.
    pub pet_names: Vec<String>,
    /// Display names of the selected services, in selection order
    pub service_names: Vec<String>,
    /// Chosen calendar day, if any
    pub date: Option<Date>,
    /// Chosen slot, if any
    pub time: Option<Time>,
    /// Free-text notes; empty string when none were entered
    pub notes: String,
}

impl BookingSummary {
    /// Projects a draft against a pet list.
    pub fn project(draft: &Draft, pets: &[Pet]) -> Self {
        let pet_names = draft
            .pet_ids()
            .iter()
            .filter_map(|id| pets.iter().find(|p| p.id == *id))
            .map(|p| p.name.clone())
            .collect();
        let service_names = draft
            .services()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();
        Self {
            pet_names,
            service_names,
            date: draft.date(),
            time: draft.time(),
            notes: draft.notes().to_string(),
        }
    }
}
