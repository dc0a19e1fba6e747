//! Registration and login endpoints.

use serde::Deserialize;

use super::{response, ApiClient};
use crate::error::{ClientError, Result};
use crate::models::{Session, User};
use crate::params::{Credentials, Registration};

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: User,
    #[serde(default)]
    token: Option<String>,
}

impl ApiClient {
    /// Registers a new owner account.
    ///
    /// Runs the client-side form checks first; everything else (duplicate
    /// email, etc.) comes back from the server as a validation error.
    pub async fn register(&self, params: &Registration) -> Result<()> {
        params.validate()?;
        let response = self
            .http()
            .post(self.url("/register"))
            .json(params)
            .send()
            .await
            .map_err(|e| ClientError::Network { source: e })?;
        response::expect_success(response).await?;
        Ok(())
    }

    /// Logs in and returns the new session.
    ///
    /// The caller (the composition root) owns storing the session; login
    /// itself has no side effect on the session store.
    pub async fn login(&self, params: &Credentials) -> Result<Session> {
        let response = self
            .http()
            .post(self.url("/login"))
            .json(params)
            .send()
            .await
            .map_err(|e| ClientError::Network { source: e })?;
        let response = response::expect_success(response).await?;
        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ClientError::from_transport("your account", e))?;
        log::info!("Logged in as user {}", body.user.id);
        Ok(Session {
            user: body.user,
            token: body.token,
        })
    }
}
