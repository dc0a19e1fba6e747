//! HTTP client for the remote appointment API.
//!
//! The server owns all authoritative state; this module is request
//! orchestration only. Endpoints are grouped by concern into submodules that
//! extend [`ApiClient`]:
//!
//! - [`auth`]: registration and login
//! - [`pets`]: pet profiles
//! - [`appointments`]: booking, history, cancellation
//! - [`events`]: public clinic events
//! - [`account`]: password change and account deletion
//!
//! Every mutating appointment call publishes on the [`RefreshBus`] so
//! subscribed views re-fetch, matching what the push channel does for
//! server-initiated changes.
//!
//! # Example
//!
//! ```rust,no_run
//! use vetbook_core::api::ApiClientBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiClientBuilder::new()
//!     .with_base_url("http://clinic.example.com")
//!     .build()?;
//! let pets = api.list_pets(Some(3)).await?;
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod appointments;
pub mod auth;
pub mod events;
pub mod pets;
mod response;

use std::time::Duration;

use crate::error::{ClientError, Result};
use crate::refresh::RefreshBus;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the remote appointment API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    refresh: RefreshBus,
}

impl ApiClient {
    /// The refresh bus this client publishes appointment changes on.
    pub fn refresh_bus(&self) -> &RefreshBus {
        &self.refresh
    }

    /// Builds a full URL for an API path like `/pets/3`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api/mobile{path}", self.base_url.trim_end_matches('/'))
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Builder for creating and configuring [`ApiClient`] instances.
#[derive(Debug, Clone, Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    refresh: Option<RefreshBus>,
}

impl ApiClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server base URL (scheme + host + port, no trailing path).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Shares an existing refresh bus instead of creating a fresh one.
    pub fn with_refresh_bus(mut self, bus: RefreshBus) -> Self {
        self.refresh = Some(bus);
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Configuration` if the underlying HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<ApiClient> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| ClientError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(ApiClient {
            http,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            refresh: self.refresh.unwrap_or_default(),
        })
    }
}
