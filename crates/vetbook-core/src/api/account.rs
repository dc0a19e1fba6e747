//! Account-settings endpoints.

use serde::Serialize;

use super::{response, ApiClient};
use crate::error::{ClientError, Result};
use crate::params::{ChangePassword, Id};

#[derive(Serialize)]
struct ChangePasswordBody<'a> {
    user_id: u64,
    current_password: &'a str,
    new_password: &'a str,
}

impl ApiClient {
    /// Changes the owner's password.
    ///
    /// The current password travels with the request; the server verifies it
    /// and rejects a wrong one as a validation error.
    pub async fn change_password(&self, user_id: u64, params: &ChangePassword) -> Result<()> {
        params.validate()?;
        let body = ChangePasswordBody {
            user_id,
            current_password: &params.current_password,
            new_password: &params.new_password,
        };
        let response = self
            .http()
            .post(self.url("/change-password"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Network { source: e })?;
        response::expect_success(response).await?;
        Ok(())
    }

    /// Asks the server to delete the owner's account.
    ///
    /// The caller is responsible for walking the confirmation countdown
    /// ([`crate::countdown::DeleteCountdown`]) before invoking this, and for
    /// clearing the local session afterwards.
    pub async fn delete_account(&self, params: &Id) -> Result<()> {
        let response = self
            .http()
            .delete(self.url(&format!("/account/{}", params.id)))
            .send()
            .await
            .map_err(|e| ClientError::Network { source: e })?;
        response::expect_success(response).await?;
        log::info!("Account {} deletion requested", params.id);
        Ok(())
    }
}
