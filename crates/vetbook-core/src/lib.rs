//! Core library for the Vetbook veterinary-appointment client.
//!
//! This crate provides everything the presentation layer needs to book and
//! manage veterinary appointments against the remote clinic API: domain
//! models, the booking-wizard state machine, the HTTP client, session
//! persistence, the refresh-signal bus, and calendar merge logic. All
//! authoritative state lives on the server; this crate orchestrates requests
//! and holds only transient, screen-scoped copies.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Presentation   │    │     Wizard /    │    │    ApiClient    │
//! │ (CLI, future UI)│───▶│  Calendar merge │───▶│  (HTTP + JSON)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!      rendering           client-side state       remote server
//! ```
//!
//! The wizard is a plain value type with no I/O: asynchronous collaborators
//! hand results back through explicit begin/complete operations, which keeps
//! the state machine unit-testable and lets it reject out-of-order
//! responses.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vetbook_core::{api::ApiClientBuilder, wizard::BookingWizard};
//! use vetbook_core::models::Service;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiClientBuilder::new()
//!     .with_base_url("http://clinic.example.com")
//!     .build()?;
//!
//! let mut wizard = BookingWizard::new();
//! let ticket = wizard.begin_pet_load();
//! match api.list_pets(Some(3)).await {
//!     Ok(pets) => wizard.complete_pet_load(ticket, pets),
//!     Err(_) => wizard.fail_pet_load(ticket),
//! };
//!
//! wizard.toggle_pet(42);
//! wizard.next()?;
//! wizard.toggle_service(Service::Grooming);
//! wizard.next()?;
//! wizard.set_date(jiff::civil::date(2025, 6, 1));
//! wizard.set_time(jiff::civil::time(9, 0, 0, 0));
//! wizard.next()?;
//!
//! if wizard.begin_submit() {
//!     let outcome = api.submit_booking(&wizard.submission(3)?).await;
//!     wizard.finish_submit(outcome.is_ok());
//!     outcome?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod calendar;
pub mod countdown;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod refresh;
pub mod session;
pub mod wizard;

// Re-export commonly used types
pub use api::{ApiClient, ApiClientBuilder};
pub use display::{Appointments, CalendarDays, OperationStatus, Pets, SlotList};
pub use error::{ClientError, Result};
pub use models::{Appointment, AppointmentStatus, ClinicEvent, Pet, Service, Session, User};
pub use params::{BookingRequest, ChangePassword, Credentials, Id, NewPet, Registration, UpdatePet};
pub use refresh::{RefreshBus, RefreshEvent};
pub use session::SessionStore;
pub use wizard::{BookingSummary, BookingWizard, Draft, Phase};
