//! Public clinic-event endpoint.

use super::{response, ApiClient};
use crate::error::{ClientError, Result};
use crate::models::ClinicEvent;

impl ApiClient {
    /// Fetches the clinic's public events for the calendar view.
    pub async fn list_events(&self) -> Result<Vec<ClinicEvent>> {
        let response = self
            .http()
            .get(self.url("/events"))
            .send()
            .await
            .map_err(|e| ClientError::from_transport("clinic events", e))?;
        let response = response::expect_success(response).await?;
        let mut events = response
            .json::<Vec<ClinicEvent>>()
            .await
            .map_err(|e| ClientError::from_transport("clinic events", e))?;
        events.sort_by_key(|e| e.date);
        Ok(events)
    }
}
