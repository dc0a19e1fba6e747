//! The four-phase booking wizard state machine.
//!
//! The wizard accumulates a [`Draft`] across a linear sequence of phases
//! (Select Pet, Select Service, Schedule, Summary) and submits it atomically
//! from the summary phase. It is a plain value type: no rendering framework,
//! no I/O. Asynchronous collaborators (the pet fetch, the submission request)
//! interact with it through explicit begin/complete operations so the state
//! machine stays unit-testable and so responses arriving after the fact can
//! be rejected.
//!
//! # Pet-load ordering
//!
//! The pet list is re-fetched on every screen focus, and rapid focus events
//! can race. Each fetch takes a [`LoadTicket`] from [`BookingWizard::begin_pet_load`]
//! and hands it back with the result; only the ticket of the most recently
//! dispatched fetch is accepted, so a slow early response can never overwrite
//! a newer one, and a response that arrives after the wizard was torn down is
//! simply dropped with its ticket.
//!
//! # Example
//!
//! ```rust
//! use vetbook_core::wizard::{BookingWizard, Phase};
//! use vetbook_core::models::Service;
//!
//! let mut wizard = BookingWizard::new();
//! wizard.toggle_pet(42);
//! assert_eq!(wizard.next().unwrap(), Phase::SelectService);
//!
//! wizard.toggle_service(Service::Grooming);
//! assert_eq!(wizard.next().unwrap(), Phase::Schedule);
//!
//! wizard.set_date(jiff::civil::date(2025, 6, 1));
//! wizard.set_time(jiff::civil::time(9, 0, 0, 0));
//! assert_eq!(wizard.next().unwrap(), Phase::Summary);
//!
//! let request = wizard.submission(3).unwrap();
//! assert_eq!(request.pet_ids, vec![42]);
//! ```

pub mod draft;
pub mod phase;
pub mod slots;
pub mod summary;


use jiff::civil::{Date, Time};

pub use draft::Draft;
pub use phase::Phase;
pub use slots::{is_valid_slot, time_slots, TimeSlots};
pub use summary::BookingSummary;

use crate::error::{ClientError, Result};
use crate::models::{Pet, Service};
use crate::params::BookingRequest;

/// Ticket identifying one dispatched pet fetch.
///
/// Deliberately opaque and non-cloneable: a ticket is spent when the fetch
/// completes.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// The booking wizard instance backing one booking screen.
///
/// Owns all mutable state exclusively; there is never more than one wizard
/// per screen and its state is never shared across instances.
#[derive(Debug, Default)]
pub struct BookingWizard {
    phase: Phase,
    draft: Draft,
    pets: Vec<Pet>,
    dispatched_loads: u64,
    submitting: bool,
}

impl BookingWizard {
    /// Creates a wizard at the first phase with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The draft accumulated so far.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The most recently accepted pet list.
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // ------------------------------------------------------------------
    // Phase transitions
    // ------------------------------------------------------------------

    /// Attempts to advance one phase.
    ///
    /// Guards are evaluated only at this moment, against the current draft.
    /// On failure the phase is left unchanged. From the summary phase there
    /// is no forward transition; `next` is a no-op there.
    ///
    /// # Errors
    ///
    /// * `ClientError::SelectionRequired` - the current phase's guard is unmet
    pub fn next(&mut self) -> Result<Phase> {
        match self.phase {
            Phase::SelectPet if !self.draft.has_pets() => Err(
                ClientError::selection_required("Please select at least one pet."),
            ),
            Phase::SelectService if !self.draft.has_services() => Err(
                ClientError::selection_required("Please select at least one service."),
            ),
            Phase::Schedule if !self.draft.has_schedule() => Err(
                ClientError::selection_required("Please select a date and time."),
            ),
            phase => {
                if let Some(next) = phase.succ() {
                    self.phase = next;
                }
                Ok(self.phase)
            }
        }
    }

    /// Moves one phase back, or signals wizard exit from the first phase.
    ///
    /// Backward movement is always allowed, needs no validation, and never
    /// clears already-entered data. Returns `None` when the caller should
    /// leave the wizard entirely.
    pub fn back(&mut self) -> Option<Phase> {
        let previous = self.phase.pred()?;
        self.phase = previous;
        Some(previous)
    }

    // ------------------------------------------------------------------
    // Selections
    // ------------------------------------------------------------------

    /// Symmetric add/remove of a pet id.
    pub fn toggle_pet(&mut self, id: u64) {
        self.draft.toggle_pet(id);
    }

    /// Symmetric add/remove of a service.
    pub fn toggle_service(&mut self, service: Service) {
        self.draft.toggle_service(service);
    }

    /// Select-all/deselect-all toggle for pets.
    ///
    /// Recomputed against the pet list the wizard holds right now, not a
    /// snapshot: if the selection covers every available pet the selection is
    /// cleared, otherwise it becomes the full current list.
    pub fn toggle_select_all_pets(&mut self) {
        if self.draft.pet_ids().len() == self.pets.len() {
            self.draft.set_pet_selection(Vec::new());
        } else {
            self.draft
                .set_pet_selection(self.pets.iter().map(|p| p.id).collect());
        }
    }

    pub fn set_date(&mut self, date: Date) {
        self.draft.set_date(date);
    }

    pub fn set_time(&mut self, time: Time) {
        self.draft.set_time(time);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.set_notes(notes);
    }

    // ------------------------------------------------------------------
    // Pet loading
    // ------------------------------------------------------------------

    /// Registers a newly dispatched pet fetch and returns its ticket.
    pub fn begin_pet_load(&mut self) -> LoadTicket {
        self.dispatched_loads += 1;
        LoadTicket(self.dispatched_loads)
    }

    /// Applies a completed pet fetch.
    ///
    /// Accepted only when the ticket belongs to the most recently dispatched
    /// fetch; stale responses are discarded and the held list is untouched.
    /// Returns whether the list was replaced.
    pub fn complete_pet_load(&mut self, ticket: LoadTicket, pets: Vec<Pet>) -> bool {
        if ticket.0 != self.dispatched_loads {
            log::debug!(
                "Discarding stale pet load {} (latest is {})",
                ticket.0,
                self.dispatched_loads
            );
            return false;
        }
        self.pets = pets;
        true
    }

    /// Records a failed pet fetch.
    ///
    /// The list is left empty so the selection screen shows the empty state;
    /// the user retries by refocusing the screen or via an explicit refresh.
    /// Stale failures are discarded like stale successes.
    pub fn fail_pet_load(&mut self, ticket: LoadTicket) -> bool {
        self.complete_pet_load(ticket, Vec::new())
    }

    // ------------------------------------------------------------------
    // Summary and submission
    // ------------------------------------------------------------------

    /// Projects the summary view from the draft and the current pet list.
    pub fn summary(&self) -> BookingSummary {
        BookingSummary::project(&self.draft, &self.pets)
    }

    /// Builds the atomic submission payload for the given owner.
    pub fn submission(&self, owner_id: u64) -> Result<BookingRequest> {
        self.draft.to_request(owner_id)
    }

    /// Marks a submission as in flight.
    ///
    /// Returns `false` when one is already outstanding, in which case the
    /// caller must not send a second request (the confirm control stays
    /// disabled for the duration).
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Completes an in-flight submission.
    ///
    /// On success the draft is discarded and the caller tears the wizard
    /// down; on failure the draft is preserved in full so the user can retry
    /// without re-entering anything.
    pub fn finish_submit(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.draft = Draft::new();
        }
    }
}
