//! Data models for the booking client.
//!
//! This module contains the domain models the client works with. All of them
//! mirror server-owned records except where noted; the authoritative copy
//! always lives behind the HTTP API. Display implementations live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation.

pub mod appointment;
pub mod event;
pub mod pet;
pub mod service;
pub mod status;
pub mod user;
pub mod wire;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use appointment::Appointment;
pub use event::ClinicEvent;
pub use pet::Pet;
pub use service::Service;
pub use status::AppointmentStatus;
pub use user::{Session, User};
