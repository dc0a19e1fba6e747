//! Display formatting for domain models and operation results.
//!
//! Domain models stay presentation-free; everything user-visible is produced
//! here, as markdown, either by `Display` impls on the models
//! ([`models`]) or by newtype wrappers for collections and operation
//! feedback. The CLI's terminal renderer turns the markdown into styled
//! output; plain-text consumers print it as is.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Appointments, CalendarDays, Pets, SlotList};
pub use status::OperationStatus;
