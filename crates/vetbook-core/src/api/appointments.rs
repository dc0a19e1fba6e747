//! Appointment endpoints: booking, history, cancellation.

use super::{response, ApiClient};
use crate::error::{ClientError, Result};
use crate::models::Appointment;
use crate::params::{BookingRequest, Id};
use crate::refresh::RefreshEvent;

impl ApiClient {
    /// Submits a completed booking draft as a single all-or-nothing request.
    ///
    /// There is no partial-success state and no automatic retry; on any
    /// failure the caller keeps the draft so the user can retry manually.
    /// The success body is opaque, only the status matters.
    pub async fn submit_booking(&self, request: &BookingRequest) -> Result<()> {
        let response = self
            .http()
            .post(self.url("/appointment"))
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network { source: e })?;
        response::expect_success(response).await?;
        log::info!(
            "Booked {} service(s) on {} at {}",
            request.services.len(),
            request.appointment_date,
            request.appointment_time
        );
        self.refresh_bus().notify(RefreshEvent::AppointmentsUpdated);
        Ok(())
    }

    /// Fetches the owner's appointments, sorted chronologically.
    pub async fn list_appointments(&self, owner_id: u64) -> Result<Vec<Appointment>> {
        let response = self
            .http()
            .get(self.url(&format!("/appointments/{owner_id}")))
            .send()
            .await
            .map_err(|e| ClientError::from_transport("your appointments", e))?;
        let response = response::expect_success(response).await?;
        let mut appointments = response
            .json::<Vec<Appointment>>()
            .await
            .map_err(|e| ClientError::from_transport("your appointments", e))?;
        appointments.sort_by_key(Appointment::starts_at);
        Ok(appointments)
    }

    /// Asks the server to cancel an appointment.
    ///
    /// Idempotency and conflict handling are entirely server-owned; the
    /// client just reports what came back.
    pub async fn cancel_appointment(&self, params: &Id) -> Result<()> {
        let response = self
            .http()
            .patch(self.url(&format!("/appointment/{}/cancel", params.id)))
            .send()
            .await
            .map_err(|e| ClientError::Network { source: e })?;
        response::expect_success(response).await?;
        log::info!("Cancelled appointment {}", params.id);
        self.refresh_bus().notify(RefreshEvent::AppointmentsUpdated);
        Ok(())
    }
}
