//! Refresh-signal collaborator interface.
//!
//! The server pushes a named event over a persistent channel whenever
//! appointment state changes behind the client's back. List, dashboard and
//! calendar views subscribe and re-fetch on receipt; the booking wizard does
//! not subscribe. The network transport for the channel is an external
//! collaborator; this module only defines the in-process fan-out the
//! transport (and the client's own mutating calls) feed into.

use tokio::sync::broadcast;

/// Wire name of the push event that announces appointment changes.
pub const APPOINTMENTS_UPDATED: &str = "appointments_updated";

/// A refresh signal delivered to subscribed views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshEvent {
    /// Appointment state changed server-side; re-fetch appointment views
    AppointmentsUpdated,
}

impl RefreshEvent {
    /// The event's wire name on the push channel.
    pub fn channel_name(&self) -> &'static str {
        match self {
            RefreshEvent::AppointmentsUpdated => APPOINTMENTS_UPDATED,
        }
    }
}

/// In-process fan-out for refresh signals.
///
/// Cloning shares the underlying channel. Publishing with no subscribers is
/// fine; the signal is simply dropped.
#[derive(Debug, Clone)]
pub struct RefreshBus {
    tx: broadcast::Sender<RefreshEvent>,
}

impl RefreshBus {
    /// Creates a bus with a small buffer; views re-fetch on any signal, so
    /// lost intermediate signals are harmless.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    /// Subscribe a view to refresh signals.
    pub fn subscribe(&self) -> broadcast::Receiver<RefreshEvent> {
        self.tx.subscribe()
    }

    /// Publish a signal to every subscribed view.
    pub fn notify(&self, event: RefreshEvent) {
        // Err only means nobody is listening right now
        let _ = self.tx.send(event);
    }
}

impl Default for RefreshBus {
    fn default() -> Self {
        Self::new()
    }
}
