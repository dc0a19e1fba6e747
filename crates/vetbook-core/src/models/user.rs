//! Pet-owner account and session models.

use serde::{Deserialize, Serialize};

/// A logged-in pet owner as returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the owner
    pub id: u64,

    /// Display name
    pub name: String,

    /// Login email address
    pub email: String,
}

/// A login session: the authenticated user plus an optional bearer token.
///
/// Login creates one, logout destroys it. Persisted across restarts by the
/// [`crate::session::SessionStore`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// The authenticated owner
    pub user: User,

    /// Bearer token, when the server issues one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
