//! Pet-profile endpoints.

use super::{response, ApiClient};
use crate::error::{ClientError, Result};
use crate::models::Pet;
use crate::params::{NewPet, UpdatePet};

impl ApiClient {
    /// Fetches the owner's pets.
    ///
    /// Called on every booking-screen focus so pets added elsewhere show up
    /// without an explicit refresh. An absent owner id is a no-op returning
    /// an empty list, not an error (the screen can render before the session
    /// has resolved).
    pub async fn list_pets(&self, owner_id: Option<u64>) -> Result<Vec<Pet>> {
        let Some(owner_id) = owner_id else {
            return Ok(Vec::new());
        };
        let response = self
            .http()
            .get(self.url(&format!("/pets/{owner_id}")))
            .send()
            .await
            .map_err(|e| ClientError::from_transport("your pets", e))?;
        let response = response::expect_success(response).await?;
        response
            .json::<Vec<Pet>>()
            .await
            .map_err(|e| ClientError::from_transport("your pets", e))
    }

    /// Adds a pet profile for the owner.
    pub async fn add_pet(&self, params: &NewPet) -> Result<()> {
        params.validate()?;
        let response = self
            .http()
            .post(self.url("/pets/add"))
            .json(params)
            .send()
            .await
            .map_err(|e| ClientError::Network { source: e })?;
        response::expect_success(response).await?;
        log::info!("Added pet '{}'", params.name);
        Ok(())
    }

    /// Updates an existing pet profile.
    pub async fn update_pet(&self, params: &UpdatePet) -> Result<()> {
        params.validate()?;
        let response = self
            .http()
            .put(self.url(&format!("/pets/{}", params.id)))
            .json(params)
            .send()
            .await
            .map_err(|e| ClientError::Network { source: e })?;
        response::expect_success(response).await?;
        Ok(())
    }
}
