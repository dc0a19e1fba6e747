//! The in-progress appointment draft accumulated across wizard phases.

use jiff::civil::{Date, Time};

use crate::error::{ClientError, Result};
use crate::models::Service;
use crate::params::BookingRequest;

/// Client-local, ephemeral appointment request.
///
/// Created empty when the wizard starts, mutated only by the selection
/// operations of the current phase, and discarded on successful submission or
/// when the user leaves the wizard. Never persisted, not even partially.
///
/// Selections keep insertion order but enforce set semantics: toggling an
/// already-selected entry removes it instead of duplicating it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pet_ids: Vec<u64>,
    services: Vec<Service>,
    date: Option<Date>,
    time: Option<Time>,
    notes: String,
}

impl Draft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Symmetric add/remove of a pet id.
    pub fn toggle_pet(&mut self, id: u64) {
        toggle(&mut self.pet_ids, id);
    }

    /// Symmetric add/remove of a service.
    pub fn toggle_service(&mut self, service: Service) {
        toggle(&mut self.services, service);
    }

    /// Replaces the pet selection wholesale (select-all / deselect-all).
    pub fn set_pet_selection(&mut self, ids: Vec<u64>) {
        self.pet_ids = ids;
        self.pet_ids.dedup();
    }

    pub fn set_date(&mut self, date: Date) {
        self.date = Some(date);
    }

    pub fn set_time(&mut self, time: Time) {
        self.time = Some(time);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn pet_ids(&self) -> &[u64] {
        &self.pet_ids
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn date(&self) -> Option<Date> {
        self.date
    }

    pub fn time(&self) -> Option<Time> {
        self.time
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Guard for leaving the pet-selection phase.
    pub fn has_pets(&self) -> bool {
        !self.pet_ids.is_empty()
    }

    /// Guard for leaving the service-selection phase.
    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }

    /// Guard for leaving the schedule phase.
    pub fn has_schedule(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// Builds the atomic submission payload for the given owner.
    ///
    /// # Errors
    ///
    /// * `ClientError::SelectionRequired` - if any phase guard is unmet, which
    ///   cannot happen when the wizard reached the summary phase through
    ///   [`crate::wizard::BookingWizard::next`]
    pub fn to_request(&self, owner_id: u64) -> Result<BookingRequest> {
        if !self.has_pets() {
            return Err(ClientError::selection_required(
                "Please select at least one pet.",
            ));
        }
        if !self.has_services() {
            return Err(ClientError::selection_required(
                "Please select at least one service.",
            ));
        }
        let (Some(date), Some(time)) = (self.date, self.time) else {
            return Err(ClientError::selection_required(
                "Please select a date and time.",
            ));
        };
        Ok(BookingRequest {
            owner_id,
            pet_ids: self.pet_ids.clone(),
            services: self.services.iter().map(|s| s.as_str().to_string()).collect(),
            notes: self.notes.clone(),
            appointment_date: date,
            appointment_time: time,
        })
    }
}

fn toggle<T: PartialEq>(selection: &mut Vec<T>, entry: T) {
    match selection.iter().position(|e| *e == entry) {
        Some(index) => {
            selection.remove(index);
        }
        None => selection.push(entry),
    }
}
